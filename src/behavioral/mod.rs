//! Behavioral patterns: how objects talk to each other.
//!
//! `command` is the one module here with real machinery — an undoable text
//! editor; the rest are small illustrative demos.

pub mod chain;
pub mod command;
pub mod iterator;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
