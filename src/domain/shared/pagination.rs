use crate::constant::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};

/// 1-based page window. Both fields are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Zero values fall back to the defaults
    pub const fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_PAGE_LIMIT } else { limit },
        }
    }

    /// Lenient parsing of raw query values.
    ///
    /// Missing, non-numeric, zero or negative values are silently replaced
    /// by their defaults instead of being reported to the caller.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: u64| {
            raw.and_then(|s| s.parse::<u64>().ok())
                .filter(|v| *v >= 1)
                .unwrap_or(default)
        };

        Self {
            page: parse(page, DEFAULT_PAGE),
            limit: parse(limit, DEFAULT_PAGE_LIMIT),
        }
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Saturates instead of overflowing for huge pages
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}
