//! Shared helpers for gateway integration tests.
//!
//! These tests need a reachable MongoDB deployment and are marked
//! `#[ignore]`. Run them with
//! `MONGODB_TEST_URI=mongodb://localhost:27017 cargo test -- --ignored`.
//! Each test works in its own throwaway database, dropped even when the
//! test body panics.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use artcraft_db::Gateway;
use futures::FutureExt;

/// Run `test` against a fresh, uniquely named database, then drop it.
///
/// Panics from `test` are re-raised after cleanup.
pub async fn with_test_gateway<F, Fut>(test: F)
where
    F: FnOnce(Gateway) -> Fut,
    Fut: Future<Output = ()>,
{
    let uri = std::env::var("MONGODB_TEST_URI")
        .expect("MONGODB_TEST_URI must be set to run database tests");
    let name = format!("artcraft_test_{}", uuid::Uuid::new_v4().simple());
    let gateway = Gateway::connect(&uri, &name)
        .await
        .expect("MONGODB_TEST_URI must be a valid connection string");

    let outcome = AssertUnwindSafe(test(gateway.clone())).catch_unwind().await;

    gateway
        .database()
        .drop()
        .await
        .expect("Failed to drop test database");
    gateway.shutdown().await;

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}
