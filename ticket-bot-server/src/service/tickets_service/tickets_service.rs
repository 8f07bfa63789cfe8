use crate::{
    dto::{input, output},
    error::Error,
    repository::TicketProjection,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Create ticket and announce it on `response_url` if provided.
    /// Announcement is not awaited.
    ///
    /// ### Returns
    /// ID of created ticket
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - user_id or text is empty
    ///     - response_url is not http(s) URL
    /// - [Error::TicketAlreadyExists] when generated id is already taken
    ///
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::TicketId, Error>;

    ///
    /// Find ticket
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn find_ticket(&self, id: String) -> Result<output::Ticket, Error>;

    ///
    /// Update ticket title and description
    ///
    /// ### Errors
    /// - [Error::Validation] when title is empty
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn update_ticket(&self, id: String, ticket: input::TicketUpdate) -> Result<(), Error>;

    async fn find_tickets(
        &self,
        projection: TicketProjection,
    ) -> Result<Vec<output::TicketListItem>, Error>;
}
