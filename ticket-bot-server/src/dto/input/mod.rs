mod ticket_create;
mod ticket_update;
mod tickets_query;

pub use ticket_create::TicketCreate;
pub use ticket_update::TicketUpdate;
pub use tickets_query::TicketsQuery;
