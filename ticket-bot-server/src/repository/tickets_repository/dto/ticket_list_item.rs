use crate::repository::tickets_repository::entity::{TicketFullEntity, TicketSummaryEntity};

///
/// Ticket fetched with [super::TicketProjection].
/// Fields outside of the projection are `None`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketListItem {
    pub id: String,
    pub title: String,

    pub user: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
}

impl From<TicketSummaryEntity> for TicketListItem {
    fn from(value: TicketSummaryEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            user: None,
            description: None,
            created: None,
        }
    }
}

impl From<TicketFullEntity> for TicketListItem {
    fn from(value: TicketFullEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            user: Some(value.created_by),
            description: Some(value.description),
            created: Some(value.created_at),
        }
    }
}
