//! Prototype: new objects by cloning registered templates.
//!
//! The registry is an explicit value passed around by the caller, not a
//! process-wide map; templates arrive as data (JSON) and spawned copies get
//! their own identity.

use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Template for one kind of enemy, loaded from data.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnemySpec {
    pub kind: String,
    pub health: u32,
    pub speed: f32,
    pub loot: Vec<String>,
}

/// A live copy of a template, distinguishable from its siblings.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: Uuid,
    pub spec: EnemySpec,
}

#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    templates: HashMap<String, EnemySpec>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads templates from a JSON array of specs, keyed by `kind`.
    pub fn from_json(seed: &str) -> serde_json::Result<Self> {
        let specs: Vec<EnemySpec> = serde_json::from_str(seed)?;
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec);
        }
        Ok(registry)
    }

    pub fn register(&mut self, spec: EnemySpec) {
        self.templates.insert(spec.kind.clone(), spec);
    }

    /// Deep-clones the template behind `kind`, stamping a fresh identity.
    /// The template itself stays untouched in the registry.
    pub fn spawn(&self, kind: &str) -> Option<Enemy> {
        self.templates.get(kind).map(|spec| Enemy {
            id: Uuid::new_v4(),
            spec: spec.clone(),
        })
    }

    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<_> = self.templates.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

const SEED: &str = r#"[
    { "kind": "slime",  "health": 20,  "speed": 0.5, "loot": ["gel"] },
    { "kind": "goblin", "health": 45,  "speed": 1.2, "loot": ["dagger", "coin"] },
    { "kind": "drake",  "health": 300, "speed": 2.0, "loot": ["scale", "ember"] }
]"#;

pub fn demo() {
    let registry = match PrototypeRegistry::from_json(SEED) {
        Ok(registry) => registry,
        Err(err) => {
            println!("bad seed data: {err}");
            return;
        }
    };
    println!("registered templates: {:?}", registry.kinds());

    let Some(first) = registry.spawn("goblin") else {
        println!("no goblin template");
        return;
    };
    let Some(second) = registry.spawn("goblin") else {
        println!("no goblin template");
        return;
    };

    println!("spawned {} {}", first.spec.kind, first.id);
    println!("spawned {} {}", second.spec.kind, second.id);
    println!(
        "same stats: {}, distinct instances: {}",
        first.spec == second.spec,
        first.id != second.id
    );
}
