mod ticket;
mod ticket_list_item;
mod ticket_projection;

pub use ticket::Ticket;
pub use ticket_list_item::TicketListItem;
pub use ticket_projection::TicketProjection;
