//! Core components, types, and utilities for the homework-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The error enum shared by every component.
//! - User-facing message text and the status verdict table.
//! - Common types and result handling.

pub mod config;
pub mod error;
pub mod messages;
pub mod types;
