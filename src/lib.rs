// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod session;
pub mod storage;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
