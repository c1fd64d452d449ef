use crate::{Error, Result};
use std::{future::Future, time::Duration};

/// Runs `call` under `limit`. A zero limit means no deadline.
pub async fn bounded<T, F>(operation: &str, limit: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if limit.is_zero() {
        return call.await;
    }
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| Error::timeout(operation, limit.as_secs()))?
}
