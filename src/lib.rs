#![deny(unused_must_use)]
#![deny(clippy::clone_on_copy)]
#![warn(clippy::nursery, clippy::pedantic)]
#![warn(clippy::allow_attributes)]
#![allow(
    // Detection is not smart
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    // Sometimes useful
    clippy::enum_glob_use,
    clippy::wildcard_imports,
    clippy::multiple_crate_versions,
    // Sometimes annoying
    clippy::use_self,
)]

pub mod application;
pub mod constant;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod utils;
