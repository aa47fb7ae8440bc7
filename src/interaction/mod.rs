//! Per-cycle processing for homework-bot.
//!
//! This module provides the work done on every poll:
//! - Validating the API response and extracting homework records
//! - Turning a record into a status-change notification
//! - Coordinating the homework client and notifier, including failure reporting

pub mod poll;
pub mod response;
pub mod status;
