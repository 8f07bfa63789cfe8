use serde::Serialize;

///
/// Chat message announcing new ticket
///
#[derive(Debug, Serialize)]
pub struct TicketCreatedMessage {
    pub response_type: &'static str,
    pub text: String,
    pub attachments: Vec<MessageAttachment>,
}

#[derive(Debug, Serialize)]
pub struct MessageAttachment {
    pub text: String,
}

impl TicketCreatedMessage {
    pub fn new(title: &str, user: &str, ticket_url: String) -> Self {
        Self {
            response_type: "in_channel",
            text: format!("Ticket \"{title}\" created by <@{user}>."),
            attachments: vec![MessageAttachment { text: ticket_url }],
        }
    }
}
