use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TicketListItem {
    pub id: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl From<repository::TicketListItem> for TicketListItem {
    fn from(value: repository::TicketListItem) -> Self {
        Self {
            id: value.id,
            title: value.title,
            user: value.user,
            description: value.description,
            created: value.created,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_json_skips_missing_fields() {
        let item = TicketListItem {
            id: "abc".to_string(),
            title: "printer jam".to_string(),
            user: None,
            description: None,
            created: None,
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json, json!({ "id": "abc", "title": "printer jam" }));
    }
}
