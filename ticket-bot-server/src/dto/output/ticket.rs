use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub user: String,
    pub title: String,
    pub description: String,
    pub created: String,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            user: value.user,
            title: value.title,
            description: value.description,
            created: value.created,
        }
    }
}
