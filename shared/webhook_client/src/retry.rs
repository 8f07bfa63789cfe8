use std::{future::Future, time::Duration};

///
/// Run async function in a loop until it returns Ok.
///
/// Gives up and returns the last error when
/// - `max_count` attempts were made
/// - `is_retryable_fn` rejects the error
///
/// Interval between attempts starts at `retry_interval` and doubles after every failure.
///
pub async fn retry<AttemptF, ErrF, RetryableF, F, Fut, T, E>(
    max_count: u8,
    retry_interval: Duration,
    attempt_log_fn: AttemptF,
    error_log_fn: ErrF,
    is_retryable_fn: RetryableF,
    async_fn: F,
) -> Result<T, E>
where
    AttemptF: Fn(u8),
    ErrF: Fn(u8, &E),
    RetryableF: Fn(&E) -> bool,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    let mut interval = retry_interval;

    loop {
        attempt += 1;

        attempt_log_fn(attempt);
        let err = match async_fn().await {
            Ok(output) => return Ok(output),
            Err(err) => err,
        };
        error_log_fn(attempt, &err);

        if attempt >= max_count || !is_retryable_fn(&err) {
            return Err(err);
        }

        tokio::time::sleep(interval).await;
        interval = interval.saturating_mul(2);
    }
}
