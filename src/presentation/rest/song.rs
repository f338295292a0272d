use axum::http::StatusCode;
use axum::extract::State;
use axum::{Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::extract::{JsonBody, PaginationQuery, SongId, SongQuery};
use super::middleware::CreatedSong;
use super::state::{self, ArcAppState};
use crate::domain::shared::Pagination;
use crate::domain::song::{NewSong, Song, SongFilter, SongPatch};
use crate::presentation::api_response::{self, Message, MessageWithResult};
use crate::presentation::error::ApiError;

const TAG: &str = "Songs";

pub fn router() -> OpenApiRouter<ArcAppState> {
    OpenApiRouter::new()
        .routes(routes!(find_songs))
        .routes(routes!(find_verses))
        .routes(routes!(delete_song, update_song))
        .routes(routes!(create_song))
}

super::with_result! {
    SongResult, Song
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/songs",
    params(SongQuery, PaginationQuery),
    responses(
        (status = 200, body = Vec<Song>),
        (status = 500, body = api_response::Error)
    ),
)]
async fn find_songs(
    State(service): State<state::SongService>,
    filter: SongFilter,
    pagination: Pagination,
) -> Result<Json<Vec<Song>>, ApiError> {
    Ok(Json(service.find_many(&filter, pagination).await?))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/verse/{song_id}",
    params(
        ("song_id" = i64, Path),
        PaginationQuery
    ),
    responses(
        (status = 200, body = Vec<String>),
        (status = 400, body = api_response::Error),
        (status = 404, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn find_verses(
    State(service): State<state::SongService>,
    SongId(id): SongId,
    pagination: Pagination,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(service.find_verses(id, pagination).await?))
}

/// Deleting an unknown id succeeds as well
#[utoipa::path(
    delete,
    tag = TAG,
    path = "/song/{song_id}",
    params(("song_id" = i64, Path)),
    responses(
        (status = 200, body = Message),
        (status = 400, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn delete_song(
    State(service): State<state::SongService>,
    SongId(id): SongId,
) -> Result<Message, ApiError> {
    service.delete(id).await?;

    Ok(Message::new("Song deleted"))
}

/// Empty fields in the body keep their stored value
#[utoipa::path(
    patch,
    tag = TAG,
    path = "/song/{song_id}",
    params(("song_id" = i64, Path)),
    request_body = SongPatch,
    responses(
        (status = 200, body = SongResult),
        (status = 400, body = api_response::Error),
        (status = 404, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn update_song(
    State(service): State<state::SongService>,
    SongId(id): SongId,
    JsonBody(patch): JsonBody<SongPatch>,
) -> Result<MessageWithResult<Song>, ApiError> {
    let song = service.update(id, patch).await?;

    Ok(MessageWithResult::new("Song updated", song))
}

/// Lyrics, release date and link are filled in later by the enrichment
/// worker
#[utoipa::path(
    post,
    tag = TAG,
    path = "/song",
    request_body = NewSong,
    responses(
        (status = 201, body = SongResult),
        (status = 400, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn create_song(
    State(service): State<state::SongService>,
    JsonBody(new_song): JsonBody<NewSong>,
) -> Result<
    (StatusCode, Extension<CreatedSong>, MessageWithResult<Song>),
    ApiError,
> {
    let song = service.create(new_song).await?;

    Ok((
        StatusCode::CREATED,
        Extension(CreatedSong(song.clone())),
        MessageWithResult::new("Song added", song),
    ))
}
