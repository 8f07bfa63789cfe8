use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    routing()
        .with_state(application_state)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.trace)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::tickets_service::MockTicketsService;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;
    use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

    #[tokio::test]
    async fn request_body_too_large() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service.expect_create_ticket().never();
        let application = create_application(
            ApplicationState {
                tickets_service: Arc::new(tickets_service),
            },
            ApplicationMiddleware {
                trace: TraceLayer::new_for_http(),
                body_limit: RequestBodyLimitLayer::new(16),
            },
        );

        let request = Request::builder()
            .method(Method::POST)
            .uri("/ticket")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("user_id=alice&text={}", "a".repeat(64))))
            .unwrap();
        let response = application.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
