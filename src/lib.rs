//! Gear colorway configurator.
//!
//! The core is a small state machine: a [`engine::Session`] owns the
//! [`catalog::Catalog`], the [`store::StyleStore`] and the
//! [`selection::SelectionState`], and [`view::project`] derives everything a
//! renderer needs from them. The terminal UI and the script runner are two
//! such renderers.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod script;
pub mod selection;
pub mod store;
pub mod tui;
pub mod view;
