//! CLI chat client for the Hiroba room server.

mod command;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use runner::run_client;
