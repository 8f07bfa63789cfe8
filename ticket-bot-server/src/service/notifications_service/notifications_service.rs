use crate::repository::Ticket;
use webhook_client::Url;

///
/// Service used to announce ticket changes to chat channels
///
#[cfg_attr(test, mockall::automock)]
pub trait NotificationsService: Send + Sync {
    ///
    /// Announce created ticket by posting message to `response_url`.
    ///
    /// Returns immediately. Delivery runs in the background and
    /// its failures are only logged.
    ///
    fn send_ticket_created(&self, response_url: Url, ticket: &Ticket);
}
