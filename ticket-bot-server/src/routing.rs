use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/ticket", post(create_ticket))
        .route("/ticket/:id", get(get_ticket).post(update_ticket))
        .route("/tickets", get(get_tickets))
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Form(ticket): Form<input::TicketCreate>,
) -> Result<Json<output::TicketId>, Error> {
    let id = tickets_service.create_ticket(ticket).await?;

    Ok(Json(id))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(id).await?;

    Ok(Json(ticket))
}

async fn update_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
    Form(ticket): Form<input::TicketUpdate>,
) -> Result<StatusCode, Error> {
    tickets_service.update_ticket(id, ticket).await?;

    Ok(StatusCode::OK)
}

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(query): Query<input::TicketsQuery>,
) -> Result<Json<Vec<output::TicketListItem>>, Error> {
    let tickets = tickets_service.find_tickets(query.view).await?;

    Ok(Json(tickets))
}
