use serde::Deserialize;

///
/// Columns returned when listing tickets
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketProjection {
    /// id and title
    #[default]
    Summary,

    /// every column
    Full,
}
