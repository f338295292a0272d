use std::convert::Infallible;
use std::num::IntErrorKind;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use utoipa::IntoParams;

use crate::domain::shared::Pagination;
use crate::domain::song::SongFilter;
use crate::presentation::error::ApiError;

mod json;
pub use json::JsonBody;

/// Numeric `song_id` path segment.
///
/// Any integer is accepted, ids without a row are the service's concern.
/// Values past the 64-bit range saturate.
pub struct SongId(pub i64);

impl<S> FromRequestParts<S> for SongId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            // Still an integer, just one no row can have
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(i64::MAX)),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(Self(i64::MIN)),
            Err(e) => Err(ApiError::bad_request(format!(
                "invalid song_id format: {e}"
            ))),
        }
    }
}

/// Decoded query pairs in request order.
///
/// Lookups return the first occurrence of a key, later repeats are ignored.
/// A query string that cannot be decoded reads as empty.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn from_parts(parts: &Parts) -> Self {
        Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_or_else(|_| Self(vec![]), |Query(pairs)| Self(pairs))
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Filters of the song list, documentation only
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(clippy::allow_attributes, dead_code)]
pub struct SongQuery {
    /// Exact group name
    group: Option<String>,
    /// Exact song title
    song: Option<String>,
}

/// Pagination parameters, documentation only
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(clippy::allow_attributes, dead_code)]
pub struct PaginationQuery {
    /// Page number, starting at 1
    #[param(value_type = Option<u64>, minimum = 1, default = 1)]
    page: Option<String>,
    /// Page size
    #[param(value_type = Option<u64>, minimum = 1, default = 10)]
    limit: Option<String>,
}

impl<S> FromRequestParts<S> for SongFilter
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let query = QueryPairs::from_parts(parts);

        Ok(Self::new(
            query.first("group").map(ToOwned::to_owned),
            query.first("song").map(ToOwned::to_owned),
        ))
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let query = QueryPairs::from_parts(parts);

        Ok(Self::parse(query.first("page"), query.first("limit")))
    }
}
