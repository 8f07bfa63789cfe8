mod dto;
mod notifications_service;
mod webhook_notifications_service;

pub use dto::WebhookNotificationsServiceConfig;
pub use notifications_service::*;
pub use webhook_notifications_service::*;

#[cfg(test)]
pub mod test {
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use tokio::{net::TcpListener, sync::mpsc};
    use webhook_client::Url;

    ///
    /// Starts local webhook receiver.
    /// Every received JSON body is forwarded to the returned channel
    ///
    pub async fn spawn_webhook_receiver() -> (Url, mpsc::UnboundedReceiver<Value>) {
        let (bodies_tx, bodies_rx) = mpsc::unbounded_channel();

        let app = Router::new()
            .route("/hook", post(receive_webhook))
            .with_state(bodies_tx);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = Url::parse(&format!("http://{address}/hook")).unwrap();

        (url, bodies_rx)
    }

    async fn receive_webhook(
        State(bodies_tx): State<mpsc::UnboundedSender<Value>>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let _ = bodies_tx.send(body);
        StatusCode::OK
    }
}
