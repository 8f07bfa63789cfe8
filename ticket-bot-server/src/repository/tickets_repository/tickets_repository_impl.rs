use super::{
    entity::{TicketFindEntity, TicketFullEntity, TicketSummaryEntity},
    Ticket, TicketListItem, TicketProjection, TicketsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use sqlx::AnyPool;

const INSERT_TICKET: &str = "INSERT INTO tickets (id, title, description, createdAt, createdBy) \
     VALUES ($1, $2, $3, $4, $5)";

const FIND_TICKET: &str = "SELECT title, description, createdBy AS created_by, createdAt AS created_at \
     FROM tickets WHERE id = $1";

const UPDATE_TICKET: &str = "UPDATE tickets SET title = $1, description = $2 WHERE id = $3";

const FIND_ALL_SUMMARY: &str = "SELECT id, title FROM tickets ORDER BY createdAt, id";

const FIND_ALL_FULL: &str = "SELECT id, title, description, createdBy AS created_by, createdAt AS created_at \
     FROM tickets ORDER BY createdAt, id";

pub struct TicketsRepositoryImpl {
    pool: AnyPool,
}

impl TicketsRepositoryImpl {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: &Ticket) -> Result<u64, repository::Error> {
        let result = sqlx::query(INSERT_TICKET)
            .bind(ticket.id.as_str())
            .bind(ticket.title.as_str())
            .bind(ticket.description.as_str())
            .bind(ticket.created.as_str())
            .bind(ticket.user.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    Error::InsertUniqueViolation
                }
                err => Error::from(err),
            })?;

        Ok(result.rows_affected())
    }

    async fn find(&self, id: &str) -> Result<Option<Ticket>, repository::Error> {
        let ticket = sqlx::query_as::<_, TicketFindEntity>(FIND_TICKET)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|entity| Ticket {
                id: id.to_string(),
                user: entity.created_by,
                title: entity.title,
                description: entity.description,
                created: entity.created_at,
            });

        Ok(ticket)
    }

    async fn update(
        &self,
        id: &str,
        title: &str,
        description: &str,
    ) -> Result<u64, repository::Error> {
        let result = sqlx::query(UPDATE_TICKET)
            .bind(title)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() {
            0 => Err(Error::NoRowsUpdated),
            rows_affected => Ok(rows_affected),
        }
    }

    async fn find_all(
        &self,
        projection: TicketProjection,
    ) -> Result<Vec<TicketListItem>, repository::Error> {
        let tickets = match projection {
            TicketProjection::Summary => {
                sqlx::query_as::<_, TicketSummaryEntity>(FIND_ALL_SUMMARY)
                    .fetch_all(&self.pool)
                    .await?
                    .into_iter()
                    .map(TicketListItem::from)
                    .collect()
            }
            TicketProjection::Full => sqlx::query_as::<_, TicketFullEntity>(FIND_ALL_FULL)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(TicketListItem::from)
                .collect(),
        };

        Ok(tickets)
    }
}
