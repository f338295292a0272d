use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use middleware::append_global_middlewares;
use state::ArcAppState;
use tokio::net::TcpListener;
use tokio::signal;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

use crate::infra::state::AppState;
use crate::utils::Pipe;

mod extract;
mod info;
mod middleware;
mod song;
mod state;

#[derive(OpenApi)]
#[openapi(info(
    title = "Song Library",
    description = "Song catalogue with paginated lyrics and metadata enrichment",
    license(name = "MIT", url = "https://opensource.org/licenses/MIT")
))]
struct ApiDoc;

pub async fn listen(
    listener: TcpListener,
    state: Arc<AppState>,
) -> std::io::Result<()> {
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutting down"),
                Err(err) => {
                    tracing::error!("Unable to listen for shutdown signal: {err}");
                }
            }
        })
        .await
}

pub fn router(state: Arc<AppState>) -> Router {
    let request_timeout = state.request_timeout;
    let enrichment = state.enrichment.clone();
    let state = ArcAppState::new(state);

    let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(song::router())
        .merge(info::router())
        .routes(routes!(health_check));

    let (router, api_doc) = api_router.split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api_doc.clone()))
        .route("/openapi.json", get(async move || Json(api_doc)))
        .pipe(|this| append_global_middlewares(this, enrichment, request_timeout))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200)
    ),
)]
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Schema-only structs for `MessageWithResult` bodies
macro_rules! with_result {
	($($name:ident, $type:ty $(,)?)*) => {
        $(
            #[derive(utoipa::ToSchema)]
            #[allow(clippy::allow_attributes, dead_code)]
            struct $name {
                message: String,
                #[schema(required = true)]
                result: $type
            }
        ) *
	};
}
use with_result;
