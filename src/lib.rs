//! Console catalogue of the classic Gang-of-Four design patterns.
//!
//! Each pattern lives in its own self-contained module with a narrated
//! `demo()`; [`catalog::Pattern`] maps CLI names onto those demos. The one
//! module with real machinery is [`behavioral::command`], a text editor
//! with linear undo/redo history and macro batching.

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod structural;
