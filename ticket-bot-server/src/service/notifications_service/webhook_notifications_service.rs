use super::{NotificationsService, WebhookNotificationsServiceConfig};
use crate::{dto::output, repository::Ticket, service::tickets_service::ticket_url};
use webhook_client::{Url, WebhookClient};

pub struct WebhookNotificationsService {
    config: WebhookNotificationsServiceConfig,
    client: WebhookClient,
}

impl WebhookNotificationsService {
    pub fn new(config: WebhookNotificationsServiceConfig, client: WebhookClient) -> Self {
        Self { config, client }
    }

    fn ticket_url(&self, id: &str) -> String {
        ticket_url(&self.config.public_url, id)
    }
}

impl NotificationsService for WebhookNotificationsService {
    fn send_ticket_created(&self, response_url: Url, ticket: &Ticket) {
        let ticket_url = self.ticket_url(&ticket.id);
        let message = output::TicketCreatedMessage::new(&ticket.title, &ticket.user, ticket_url);
        let client = self.client.clone();
        let id = ticket.id.clone();

        tracing::debug!(id, "spawning ticket created notification");
        tokio::spawn(async move {
            match client.post_json(&response_url, &message).await {
                Ok(()) => tracing::info!(id, "sent ticket created notification"),
                Err(err) => {
                    tracing::error!(id, %err, "failed to send ticket created notification")
                }
            }
        });
    }
}
