mod webhook_notifications_service_config;

pub use webhook_notifications_service_config::WebhookNotificationsServiceConfig;
