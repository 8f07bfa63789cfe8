use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, Once,
    },
    time::Duration,
};
use tokio::{net::TcpListener, sync::mpsc};
use tracing::level_filters::LevelFilter;
use webhook_client::{Url, WebhookClient, WebhookClientConfig};

static BEFORE_ALL: Once = Once::new();

pub fn init_test_environment() {
    BEFORE_ALL.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

pub fn create_client(timeout: Duration, retry_max_count: u8) -> WebhookClient {
    let config = WebhookClientConfig {
        timeout,
        retry_max_count,
        retry_interval: Duration::from_millis(10),
    };

    WebhookClient::new(config).unwrap()
}

///
/// Local webhook receiver.
/// Responds with queued statuses, then with 200 once the queue is drained.
///
pub struct TestWebhookServer {
    pub url: Url,
    pub hits: Arc<AtomicUsize>,
    pub bodies: mpsc::UnboundedReceiver<Value>,
}

#[derive(Clone)]
struct TestWebhookState {
    statuses: Arc<Mutex<VecDeque<StatusCode>>>,
    delay: Duration,
    hits: Arc<AtomicUsize>,
    bodies_tx: mpsc::UnboundedSender<Value>,
}

pub async fn spawn_webhook_server(statuses: &[StatusCode], delay: Duration) -> TestWebhookServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let (bodies_tx, bodies) = mpsc::unbounded_channel();
    let state = TestWebhookState {
        statuses: Arc::new(Mutex::new(statuses.iter().copied().collect())),
        delay,
        hits: hits.clone(),
        bodies_tx,
    };

    let app = Router::new()
        .route("/hook", post(receive_webhook))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestWebhookServer {
        url: hook_url(address),
        hits,
        bodies,
    }
}

pub fn hook_url(address: SocketAddr) -> Url {
    Url::parse(&format!("http://{address}/hook")).unwrap()
}

async fn receive_webhook(
    State(state): State<TestWebhookState>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let _ = state.bodies_tx.send(body);

    tokio::time::sleep(state.delay).await;

    state
        .statuses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(StatusCode::OK)
}
