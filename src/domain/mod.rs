pub mod shared;
pub mod song;
