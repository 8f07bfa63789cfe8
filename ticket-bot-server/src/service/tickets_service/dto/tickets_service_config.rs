use crate::service::id_generator::IdStrategy;

pub struct TicketsServiceConfig {
    /// Base of links to tickets. Ends with `/`
    pub public_url: String,

    pub id_strategy: IdStrategy,

    /// Used only with random ids. Regenerating deterministic id can't help
    pub max_insert_attempts: u8,
}
