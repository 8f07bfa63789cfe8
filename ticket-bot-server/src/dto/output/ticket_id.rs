use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TicketId {
    pub id: String,

    /// Link to the ticket page
    pub url: String,
}
