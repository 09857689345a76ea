//! Rentscope - a terminal dashboard for rental market statistics
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod data;
pub mod error;
pub mod events;
pub mod models;
pub mod state;
pub mod terminal;
pub mod ui;
