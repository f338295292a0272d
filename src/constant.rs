pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

pub const VERSE_SEPARATOR: char = '\n';

pub const GROUP_MAX_LENGTH: usize = 100;
pub const SONG_TITLE_MAX_LENGTH: usize = 100;

pub const DEFAULT_ENRICHMENT_QUEUE_SIZE: usize = 64;
pub const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SERVER_PORT: u16 = 8080;
