//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the homework-bot:
//! - Homework status sources (e.g., the Practicum API)
//! - Notifiers (e.g., Telegram)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod homework;
pub mod notify;
