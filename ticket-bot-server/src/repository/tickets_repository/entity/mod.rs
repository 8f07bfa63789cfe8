mod ticket_find_entity;
mod ticket_list_entity;

pub use ticket_find_entity::TicketFindEntity;
pub use ticket_list_entity::{TicketFullEntity, TicketSummaryEntity};
