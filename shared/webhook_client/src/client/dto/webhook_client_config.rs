use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WebhookClientConfig {
    /// Limit of a single attempt, connecting included
    pub timeout: Duration,

    /// Total number of attempts, the first one included
    pub retry_max_count: u8,
    /// Interval before the second attempt. Doubles after every failed attempt
    pub retry_interval: Duration,
}
