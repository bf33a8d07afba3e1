//! Newdle UI Components
//!
//! This crate provides presentational Dioxus components for the Newdle
//! desktop client. They hold no application state: everything they show
//! comes in through props and every interaction goes out through an
//! `EventHandler`.
//!
//! Styles for the `ui-*` classes live in the application's global
//! stylesheet.

pub mod components;

pub use components::*;
