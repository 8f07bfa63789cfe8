use serde::Deserialize;

///
/// Slash command form.
///
/// Missing fields deserialize to empty values,
/// so they are reported by validation instead of the extractor
///
#[derive(Debug, Deserialize)]
pub struct TicketCreate {
    #[serde(default)]
    pub user_id: String,

    /// Becomes the ticket title
    #[serde(default)]
    pub text: String,

    pub response_url: Option<String>,
}
