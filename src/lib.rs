//! Homework Bot Library
//!
//! Polls the Practicum homework status API and relays review status changes
//! to a Telegram chat. Components are exposed here for testing purposes.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod poller;
pub mod services;
