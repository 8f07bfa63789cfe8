#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,

    pub user: String,

    pub title: String,
    pub description: String,

    pub created: String,
}
