use axum::Json;
use chrono::{DateTime, Utc};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::state::ArcAppState;
use crate::domain::song::SongInfo;

const TAG: &str = "Metadata";

const SAMPLE_TEXT: &str = "Ooh baby, don't you know I suffer?\n\
Ooh baby, can you hear me moan?\n\
You caught me under false pretenses\n\
How long before you let me go?\n\
\n\
Ooh\n\
You set my soul alight\n\
Ooh\n\
You set my soul alight";

const SAMPLE_RELEASE_DATE: &str = "2025-03-28T21:22:19Z";
const SAMPLE_LINK: &str = "https://www.youtube.com/watch?v=Xsp3_a-PMTw";

pub fn router() -> OpenApiRouter<ArcAppState> {
    OpenApiRouter::new().routes(routes!(song_info))
}

fn sample() -> SongInfo {
    SongInfo {
        text: SAMPLE_TEXT.to_string(),
        release_date: DateTime::parse_from_rfc3339(SAMPLE_RELEASE_DATE)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        link: SAMPLE_LINK.to_string(),
    }
}

/// Stand-in for the external metadata provider.
///
/// Answers every query with the same sample so the service can point
/// `EXTERNAL_API_URL` at itself during development.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/info",
    params(
        ("group" = Option<String>, Query),
        ("song" = Option<String>, Query)
    ),
    responses(
        (status = 200, body = SongInfo)
    ),
)]
async fn song_info() -> Json<SongInfo> {
    Json(sample())
}
