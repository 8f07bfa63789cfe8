mod ticket;
mod ticket_created_message;
mod ticket_id;
mod ticket_list_item;

pub use ticket::Ticket;
pub use ticket_created_message::TicketCreatedMessage;
pub use ticket_id::TicketId;
pub use ticket_list_item::TicketListItem;
