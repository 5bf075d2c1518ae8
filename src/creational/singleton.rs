//! Singleton: one process-wide instance, created on first use.
//!
//! Rust's `OnceLock` gives lazy, thread-safe, one-time initialization
//! without a global mutable map; every caller gets the same object.

use std::sync::OnceLock;
use uuid::Uuid;

/// Process-wide application settings.
#[derive(Debug)]
pub struct AppConfig {
    /// Stamped once at initialization; identical across all accesses.
    pub instance_id: Uuid,
    pub app_name: &'static str,
    pub max_sessions: usize,
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Returns the single instance, initializing it on the first call.
    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| AppConfig {
            instance_id: Uuid::new_v4(),
            app_name: "gof-patterns",
            max_sessions: 16,
        })
    }
}

pub fn demo() {
    let first = AppConfig::global();
    let second = AppConfig::global();

    println!(
        "first access:  {} (instance {})",
        first.app_name, first.instance_id
    );
    println!(
        "second access: {} (instance {})",
        second.app_name, second.instance_id
    );
    println!(
        "same instance: {}",
        std::ptr::eq(first, second) && first.instance_id == second.instance_id
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_same_instance() {
        let a = AppConfig::global();
        let b = AppConfig::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.instance_id, b.instance_id);
    }
}
