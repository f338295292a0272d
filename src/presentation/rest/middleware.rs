use std::any::Any;
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::application::enrichment::{EnrichmentJob, Queue};
use crate::domain::song::Song;
use crate::presentation::api_response;

/// Set on the response of a successful creation, picked up by
/// [`enrich_on_create`] once the row has its id
#[derive(Clone)]
pub struct CreatedSong(pub Song);

/// Outermost first: access log, timeout (408), panic recovery (500), then
/// the enrichment hook
pub fn append_global_middlewares<S>(
    router: Router<S>,
    enrichment: Queue,
    request_timeout: Duration,
) -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    router
        .layer(middleware::from_fn_with_state(enrichment, enrich_on_create))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_uppercase();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let res = next.run(req).await;

    let latency = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        "[{method}]: {path} | {} | {latency:.3}ms",
        res.status().as_u16()
    );

    res
}

async fn enrich_on_create(
    State(queue): State<Queue>,
    req: Request,
    next: Next,
) -> Response {
    let res = next.run(req).await;

    if let Some(CreatedSong(song)) = res.extensions().get::<CreatedSong>() {
        queue.submit(EnrichmentJob::from(song));
    }

    res
}

#[expect(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("handler panicked: {detail}");

    api_response::Error::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error",
    )
    .into_response()
}
