//! Path-segment flag parsing.

/// Interpret the `customizable` path segment of the art filter route.
///
/// Only the literal `true` (any casing) selects customizable arts; every
/// other value, including `1` and `yes`, selects non-customizable ones.
pub fn parse_customization_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_true() {
        assert!(parse_customization_flag("true"));
    }

    #[test]
    fn mixed_case_true() {
        assert!(parse_customization_flag("True"));
        assert!(parse_customization_flag("TRUE"));
    }

    #[test]
    fn literal_false() {
        assert!(!parse_customization_flag("false"));
    }

    #[test]
    fn other_truthy_looking_values_are_false() {
        assert!(!parse_customization_flag("1"));
        assert!(!parse_customization_flag("yes"));
        assert!(!parse_customization_flag(""));
    }
}
