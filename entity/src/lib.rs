pub mod prelude;

pub mod songs;
