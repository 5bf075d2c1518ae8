//! Maps pattern names onto their demo functions.

use crate::{behavioral, creational, structural};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown pattern: {0}")]
    Unknown(String),
    #[error("empty pattern name")]
    Empty,
}

/// The three classic families, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Creational,
    Structural,
    Behavioral,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Creational, Group::Structural, Group::Behavioral];

    pub const fn name(&self) -> &'static str {
        match self {
            Group::Creational => "Creational",
            Group::Structural => "Structural",
            Group::Behavioral => "Behavioral",
        }
    }
}

/// The seventeen catalogued patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Singleton,
    Builder,
    Prototype,
    FactoryMethod,
    AbstractFactory,
    Adapter,
    Decorator,
    Facade,
    Composite,
    Proxy,
    Command,
    Observer,
    Strategy,
    State,
    Iterator,
    TemplateMethod,
    Chain,
}

impl Pattern {
    /// Fixed demonstration order: creational, then structural, then
    /// behavioral.
    pub const ALL: [Pattern; 17] = [
        Pattern::Singleton,
        Pattern::Builder,
        Pattern::Prototype,
        Pattern::FactoryMethod,
        Pattern::AbstractFactory,
        Pattern::Adapter,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Composite,
        Pattern::Proxy,
        Pattern::Command,
        Pattern::Observer,
        Pattern::Strategy,
        Pattern::State,
        Pattern::Iterator,
        Pattern::TemplateMethod,
        Pattern::Chain,
    ];

    /// The name accepted on the command line.
    pub const fn key(&self) -> &'static str {
        match self {
            Pattern::Singleton => "singleton",
            Pattern::Builder => "builder",
            Pattern::Prototype => "prototype",
            Pattern::FactoryMethod => "factory-method",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Adapter => "adapter",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Composite => "composite",
            Pattern::Proxy => "proxy",
            Pattern::Command => "command",
            Pattern::Observer => "observer",
            Pattern::Strategy => "strategy",
            Pattern::State => "state",
            Pattern::Iterator => "iterator",
            Pattern::TemplateMethod => "template-method",
            Pattern::Chain => "chain-of-responsibility",
        }
    }

    pub const fn group(&self) -> Group {
        match self {
            Pattern::Singleton
            | Pattern::Builder
            | Pattern::Prototype
            | Pattern::FactoryMethod
            | Pattern::AbstractFactory => Group::Creational,
            Pattern::Adapter
            | Pattern::Decorator
            | Pattern::Facade
            | Pattern::Composite
            | Pattern::Proxy => Group::Structural,
            Pattern::Command
            | Pattern::Observer
            | Pattern::Strategy
            | Pattern::State
            | Pattern::Iterator
            | Pattern::TemplateMethod
            | Pattern::Chain => Group::Behavioral,
        }
    }

    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::Empty);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.key() == trimmed)
            .ok_or_else(|| CatalogError::Unknown(trimmed.to_string()))
    }

    /// Runs the demo behind this pattern. Async only because the proxy demo
    /// awaits simulated remote calls.
    pub async fn run(&self) {
        match self {
            Pattern::Singleton => creational::singleton::demo(),
            Pattern::Builder => creational::builder::demo(),
            Pattern::Prototype => creational::prototype::demo(),
            Pattern::FactoryMethod => creational::factory_method::demo(),
            Pattern::AbstractFactory => creational::abstract_factory::demo(),
            Pattern::Adapter => structural::adapter::demo(),
            Pattern::Decorator => structural::decorator::demo(),
            Pattern::Facade => structural::facade::demo(),
            Pattern::Composite => structural::composite::demo(),
            Pattern::Proxy => structural::proxy::demo().await,
            Pattern::Command => behavioral::command::demo(),
            Pattern::Observer => behavioral::observer::demo(),
            Pattern::Strategy => behavioral::strategy::demo(),
            Pattern::State => behavioral::state::demo(),
            Pattern::Iterator => behavioral::iterator::demo(),
            Pattern::TemplateMethod => behavioral::template_method::demo(),
            Pattern::Chain => behavioral::chain::demo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(Pattern::parse("singleton"), Ok(Pattern::Singleton));
        assert_eq!(Pattern::parse("factory-method"), Ok(Pattern::FactoryMethod));
        assert_eq!(Pattern::parse("  command  "), Ok(Pattern::Command));
        assert_eq!(
            Pattern::parse("chain-of-responsibility"),
            Ok(Pattern::Chain)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            Pattern::parse("flyweight"),
            Err(CatalogError::Unknown("flyweight".into()))
        );
    }

    #[test]
    fn test_parse_empty_name() {
        assert_eq!(Pattern::parse("   "), Err(CatalogError::Empty));
    }

    #[test]
    fn test_all_keys_are_unique() {
        let mut keys: Vec<_> = Pattern::ALL.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Pattern::ALL.len());
    }

    #[test]
    fn test_catalogue_order_is_grouped() {
        let groups: Vec<_> = Pattern::ALL.iter().map(|p| p.group()).collect();
        let mut regrouped = groups.clone();
        regrouped.sort_by_key(|g| Group::ALL.iter().position(|x| x == g));
        assert_eq!(groups, regrouped);
    }
}
