//! Room-based presence and broadcast server library.
//!
//! Clients connect over WebSocket, enter named rooms and exchange chat
//! messages and typing-activity notifications scoped to their current room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
