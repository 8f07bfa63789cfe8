mod webhook_client_config;

pub use webhook_client_config::WebhookClientConfig;
