mod created_at;
mod dto;
mod ticket_url;
mod tickets_service;
mod tickets_service_impl;

pub use created_at::format_created_at;
pub use dto::TicketsServiceConfig;
pub use ticket_url::ticket_url;
pub use tickets_service::*;
pub use tickets_service_impl::*;
