use artcraft_db::Gateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the gateway's driver client is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database gateway, owned by `main` and shut down after the server stops.
    pub gateway: Gateway,
}
