use crate::repository::TicketProjection;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TicketsQuery {
    #[serde(default)]
    pub view: TicketProjection,
}
