//! Collection gateway over the Art & Craft MongoDB database.
//!
//! [`Gateway`] owns the driver client for the lifetime of the process and
//! hands out the two collections the server works with. Repositories in
//! [`repositories`] take `&Gateway` as their first argument.

use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

pub mod models;
pub mod repositories;

/// Collection holding art & craft items.
pub const ARTS_COLLECTION: &str = "arts";

/// Collection holding item categories.
pub const CATEGORIES_COLLECTION: &str = "categories";

/// Driver-level error type surfaced by every gateway operation.
pub type DbError = mongodb::error::Error;

/// Owned handle to the database and its collections.
///
/// Cheap to clone: the driver client is reference-counted internally and
/// safe for concurrent use. Call [`Gateway::shutdown`] once the server has
/// stopped serving requests.
#[derive(Clone, Debug)]
pub struct Gateway {
    client: Client,
    database: Database,
}

impl Gateway {
    /// Build a gateway from a connection string.
    ///
    /// No network round-trip happens here; use [`health_check`] to verify
    /// the deployment is reachable.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, DbError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("artcraft-api".to_string());
        let client = Client::with_options(options)?;
        Ok(Self::from_client(client, database_name))
    }

    /// Wrap an existing client, selecting `database_name`.
    pub fn from_client(client: Client, database_name: &str) -> Self {
        let database = client.database(database_name);
        Self { client, database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn arts(&self) -> Collection<Document> {
        self.database.collection(ARTS_COLLECTION)
    }

    pub fn categories(&self) -> Collection<Document> {
        self.database.collection(CATEGORIES_COLLECTION)
    }

    /// Close the driver's connections and stop its background monitors.
    ///
    /// Waits for outstanding cursors and sessions to be dropped first.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!(database = %self.database.name(), "Database client shut down");
    }
}

/// Verify database connectivity with a `ping` command.
pub async fn health_check(gateway: &Gateway) -> Result<(), DbError> {
    gateway.database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
