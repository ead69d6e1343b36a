use crate::utils::error::Result;
use std::future::Future;
use std::time::Duration;

const BASE_DELAY: Duration = Duration::from_millis(100);

/// Run `op` up to `max_tries` times with exponential backoff, retrying only
/// transient errors. Integrity and validation failures surface on the first
/// attempt without a retry.
pub async fn retry_with_backoff<T, F, Fut>(op_name: &str, max_tries: u32, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = BASE_DELAY;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_transient() => return Err(err),
            Err(err) if attempt >= max_tries => {
                tracing::error!("Giving up {op_name}(...) after {attempt} tries: {err}");
                return Err(err);
            }
            Err(err) => {
                tracing::warn!("Backing off {op_name}(...) for {delay:?}: {err}");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
        }
    }
}
