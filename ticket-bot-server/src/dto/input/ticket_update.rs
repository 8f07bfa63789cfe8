use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketUpdate {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}
