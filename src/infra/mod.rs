pub mod config;
pub mod database;
pub mod logger;
pub mod metadata;
pub mod state;
