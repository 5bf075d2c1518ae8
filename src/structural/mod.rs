//! Structural patterns: how objects compose into larger shapes.

pub mod adapter;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod proxy;
