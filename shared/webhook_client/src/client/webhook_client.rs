use super::WebhookClientConfig;
use crate::{error::Error, retry::retry};
use reqwest::{Client, Url};
use serde::Serialize;
use std::sync::Arc;

///
/// HTTP client delivering JSON payloads with POST requests.
///
/// Clones share the underlying connection pool,
/// so it's fine to clone it into every spawned task.
///
#[derive(Clone)]
pub struct WebhookClient {
    config: Arc<WebhookClientConfig>,
    client: Client,
}

impl WebhookClient {
    pub fn new(config: WebhookClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    ///
    /// Sends `body` serialized to JSON.
    /// Retries according to [WebhookClientConfig].
    ///
    /// ### Errors
    /// - [Error::Request] when the last attempt could not be completed
    /// - [Error::Status] when the last response had non-2xx status
    ///
    #[tracing::instrument(
        name = "Webhook",
        target = "webhook_client",
        skip_all,
        fields(url = %url)
    )]
    pub async fn post_json<T>(&self, url: &Url, body: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        retry(
            self.config.retry_max_count,
            self.config.retry_interval,
            |attempt| tracing::debug!(attempt, "sending webhook"),
            |attempt, err| tracing::warn!(attempt, %err, "webhook attempt failed"),
            Error::is_retryable,
            || self.post_json_once(url, body),
        )
        .await?;

        tracing::debug!("webhook delivered");

        Ok(())
    }

    async fn post_json_once<T>(&self, url: &Url, body: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let response = self.client.post(url.clone()).json(body).send().await?;

        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(Error::Status(status)),
        }
    }
}
