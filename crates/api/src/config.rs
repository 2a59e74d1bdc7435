use std::fmt;

use url::Url;

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default database name holding the `arts` and `categories` collections.
pub const DEFAULT_DB_NAME: &str = "artCraftDB";

/// Default SRV host used when the URI is assembled from credentials.
pub const DEFAULT_DB_CLUSTER: &str = "cluster0.mongodb.net";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Database credentials missing: set MONGODB_URI or both DB_USER and DB_PASS")]
    MissingCredentials,

    #[error("Invalid database URI: {0}")]
    InvalidUri(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database credentials have defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Seconds allowed for closing the database client after the HTTP
    /// server has drained (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Connection string and database name.
///
/// `Debug` masks the password so the config can be logged safely.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &redact_uri(&self.uri))
            .field("name", &self.name)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `HOST`                 | `0.0.0.0`                 |
    /// | `PORT`                 | `5000`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                      |
    /// | `MONGODB_URI`          | built from `DB_USER`/`DB_PASS` |
    /// | `DB_CLUSTER`           | `cluster0.mongodb.net`    |
    /// | `DB_NAME`              | `artCraftDB`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT, "port number")?;
        let shutdown_timeout_secs =
            parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30, "number of seconds")?;
        let database = DatabaseConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            shutdown_timeout_secs,
            database,
        })
    }
}

impl DatabaseConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into());

        let uri = match lookup("MONGODB_URI").filter(|uri| !uri.is_empty()) {
            Some(uri) => uri,
            None => {
                let (Some(user), Some(pass)) = (lookup("DB_USER"), lookup("DB_PASS")) else {
                    return Err(ConfigError::MissingCredentials);
                };
                let cluster = lookup("DB_CLUSTER").unwrap_or_else(|| DEFAULT_DB_CLUSTER.into());
                build_srv_uri(&user, &pass, &cluster)?
            }
        };

        Ok(Self { uri, name })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var,
            expected,
            value,
        }),
    }
}

/// Assemble an Atlas-style SRV connection string, percent-encoding the
/// credentials.
pub fn build_srv_uri(user: &str, pass: &str, cluster: &str) -> Result<String, ConfigError> {
    let mut url = Url::parse(&format!("mongodb+srv://{cluster}/?retryWrites=true&w=majority"))
        .map_err(|e| ConfigError::InvalidUri(e.to_string()))?;
    url.set_username(user)
        .map_err(|()| ConfigError::InvalidUri("cannot set username".into()))?;
    url.set_password(Some(pass))
        .map_err(|()| ConfigError::InvalidUri("cannot set password".into()))?;
    Ok(url.into())
}

fn redact_uri(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.into()
        }
        Err(_) => "<unparseable>".into(),
    }
}
