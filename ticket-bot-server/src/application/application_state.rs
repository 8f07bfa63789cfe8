use super::ApplicationEnv;
use crate::{
    repository::{self, TicketsRepositoryImpl},
    service::{
        notifications_service::{WebhookNotificationsService, WebhookNotificationsServiceConfig},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use sqlx::AnyPool;
use std::{sync::Arc, time::Duration};
use webhook_client::{WebhookClient, WebhookClientConfig};

const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: AnyPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let db_pool = repository::connect(
        &env.db_connection_string,
        env.db_max_connections,
        DB_ACQUIRE_TIMEOUT,
    )
    .await?;
    repository::run_schema_script(&db_pool, &env.db_schema_path).await?;

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db_pool.clone());
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = WebhookClientConfig {
        timeout: env.webhook_timeout,
        retry_max_count: env.webhook_retry_max_count,
        retry_interval: env.webhook_retry_interval,
    };
    let webhook_client = WebhookClient::new(config)?;

    let config = WebhookNotificationsServiceConfig {
        public_url: env.public_url.clone(),
    };
    let notifications_service = WebhookNotificationsService::new(config, webhook_client);
    let notifications_service = Arc::new(notifications_service);

    let config = TicketsServiceConfig {
        public_url: env.public_url.clone(),
        id_strategy: env.id_strategy,
        max_insert_attempts: env.max_insert_attempts,
    };
    let tickets_service =
        TicketsServiceImpl::new(config, tickets_repository, notifications_service);
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState { tickets_service },
        ApplicationStateToClose { db_pool },
    ))
}
