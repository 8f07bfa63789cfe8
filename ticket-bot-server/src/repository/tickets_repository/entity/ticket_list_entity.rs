use sqlx::FromRow;

#[derive(FromRow)]
pub struct TicketSummaryEntity {
    pub id: String,
    pub title: String,
}

#[derive(FromRow)]
pub struct TicketFullEntity {
    pub id: String,
    pub title: String,
    pub description: String,

    pub created_by: String,
    pub created_at: String,
}
