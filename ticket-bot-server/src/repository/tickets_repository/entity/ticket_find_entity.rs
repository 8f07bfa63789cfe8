use sqlx::FromRow;

///
/// Row selected by id. The id itself is not selected,
/// caller already knows it.
///
#[derive(FromRow)]
pub struct TicketFindEntity {
    pub title: String,
    pub description: String,

    pub created_by: String,
    pub created_at: String,
}
