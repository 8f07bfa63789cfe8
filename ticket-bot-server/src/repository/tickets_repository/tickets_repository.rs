use super::{Ticket, TicketListItem, TicketProjection};
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket.
    ///
    /// ### Returns
    /// number of inserted rows
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation]
    /// when ticket with the same id already exists
    ///
    async fn insert(&self, ticket: &Ticket) -> Result<u64, repository::Error>;

    ///
    /// Finds ticket by id.
    /// Returns `None` when there's no such ticket
    ///
    async fn find(&self, id: &str) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Updates ticket title and description.
    /// Remaining fields never change.
    ///
    /// ### Returns
    /// number of updated rows
    ///
    /// ### Errors
    /// - [repository::Error::NoRowsUpdated] when ticket does not exist
    ///
    async fn update(
        &self,
        id: &str,
        title: &str,
        description: &str,
    ) -> Result<u64, repository::Error>;

    ///
    /// Finds every ticket ordered by creation time
    ///
    async fn find_all(
        &self,
        projection: TicketProjection,
    ) -> Result<Vec<TicketListItem>, repository::Error>;
}
