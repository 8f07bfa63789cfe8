use super::{format_created_at, ticket_url, TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, Ticket, TicketProjection, TicketsRepository},
    service::notifications_service::NotificationsService,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use webhook_client::Url;

pub const DEFAULT_DESCRIPTION: &str = "Describe ticket here";

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    notifications_service: Arc<dyn NotificationsService>,
}

/// Validated [input::TicketCreate]
struct NewTicket {
    user: String,
    title: String,
    response_url: Option<Url>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        notifications_service: Arc<dyn NotificationsService>,
    ) -> Self {
        Self {
            config,
            repository,
            notifications_service,
        }
    }

    fn validate_create_ticket(ticket: input::TicketCreate) -> Result<NewTicket, Error> {
        let user = ticket.user_id.trim();
        if user.is_empty() {
            return Err(Error::Validation("user_id is required"));
        }

        let title = ticket.text.trim();
        if title.is_empty() {
            return Err(Error::Validation("text is required"));
        }

        let response_url = match ticket.response_url.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(response_url) => Some(Self::validate_response_url(response_url)?),
        };

        Ok(NewTicket {
            user: user.to_string(),
            title: title.to_string(),
            response_url,
        })
    }

    fn validate_response_url(response_url: &str) -> Result<Url, Error> {
        let url =
            Url::parse(response_url).map_err(|_| Error::Validation("response_url is invalid"))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(Error::Validation("response_url must use http or https")),
        }
    }

    fn validate_update_ticket(ticket: input::TicketUpdate) -> Result<(String, String), Error> {
        let title = ticket.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("title is required"));
        }

        let description = ticket
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Ok((title.to_string(), description))
    }

    ///
    /// Inserts ticket with freshly generated id.
    /// Random ids are regenerated when already taken.
    ///
    async fn insert_ticket(
        &self,
        user: String,
        title: String,
        created: String,
    ) -> Result<Ticket, Error> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let ticket = Ticket {
                id: self.config.id_strategy.generate(&user, &title, &created),
                user: user.clone(),
                title: title.clone(),
                description: DEFAULT_DESCRIPTION.to_string(),
                created: created.clone(),
            };

            match self.repository.insert(&ticket).await {
                Ok(_) => return Ok(ticket),
                Err(repository::Error::InsertUniqueViolation) => {
                    tracing::warn!(id = %ticket.id, attempt, "ticket id already taken");

                    let can_retry = self.config.id_strategy.is_random()
                        && attempt < self.config.max_insert_attempts;
                    if !can_retry {
                        return Err(Error::TicketAlreadyExists);
                    }
                }
                Err(err) => return Err(Error::Database(err)),
            }
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::TicketId, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let NewTicket {
            user,
            title,
            response_url,
        } = Self::validate_create_ticket(ticket)?;

        let created = format_created_at(OffsetDateTime::now_utc()).map_err(anyhow::Error::from)?;

        let ticket = self.insert_ticket(user, title, created).await?;
        tracing::info!(id = %ticket.id, "created ticket");

        match response_url {
            Some(response_url) => self
                .notifications_service
                .send_ticket_created(response_url, &ticket),
            None => tracing::debug!("response_url missing, notification skipped"),
        }

        let url = ticket_url(&self.config.public_url, &ticket.id);

        Ok(output::TicketId { id: ticket.id, url })
    }

    async fn find_ticket(&self, id: String) -> Result<output::Ticket, Error> {
        tracing::info!(id, "finding ticket");

        let ticket = self
            .repository
            .find(&id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!("found ticket");

        Ok(ticket.into())
    }

    async fn update_ticket(&self, id: String, ticket: input::TicketUpdate) -> Result<(), Error> {
        tracing::info!(id, "updating ticket");
        tracing::trace!(?ticket);

        let (title, description) = Self::validate_update_ticket(ticket)?;

        self.repository
            .update(&id, &title, &description)
            .await
            .map_err(|err| match err {
                repository::Error::NoRowsUpdated => Error::TicketNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("updated ticket");

        Ok(())
    }

    async fn find_tickets(
        &self,
        projection: TicketProjection,
    ) -> Result<Vec<output::TicketListItem>, Error> {
        tracing::info!(?projection, "finding tickets");

        let tickets = self.repository.find_all(projection).await?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets
            .into_iter()
            .map(output::TicketListItem::from)
            .collect();

        Ok(tickets)
    }
}
