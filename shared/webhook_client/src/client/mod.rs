mod dto;
mod webhook_client;

pub use dto::WebhookClientConfig;
pub use webhook_client::WebhookClient;
