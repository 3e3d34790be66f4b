use crate::config::ResolverConfig;
use crate::dependencies::container::Container;
use crate::dependencies::types::Producer;
use crate::errors::InjectError;
use std::collections::HashMap;

/// **NAMESPACE REGISTRY**
///
/// **PURPOSE**: Owns one container per namespace for as long as the registry lives
/// **GUARANTEE**: Namespaces are created on first registration and never removed
pub struct Registry {
    namespaces: HashMap<String, Container>,
    config: ResolverConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            namespaces: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// **REGISTER PRODUCERS**
    ///
    /// **PARAMETERS**:
    /// - `namespace: &str` - Target namespace, created when absent
    /// - `producers` - Producers to wrap and store
    ///
    /// **RETURNS**: `Err(DuplicateDependency)` if any name is taken; nothing is stored then
    pub fn register<I>(&mut self, namespace: &str, producers: I) -> Result<(), InjectError>
    where
        I: IntoIterator<Item = Producer>,
    {
        let producers: Vec<Producer> = producers.into_iter().collect();

        if let Some(container) = self.namespaces.get(namespace) {
            return container.insert_all(producers);
        }

        let container = Container::new(namespace, self.config);
        container.insert_all(producers)?;
        log::debug!("Created namespace '{}'", namespace);
        self.namespaces.insert(namespace.to_string(), container);
        Ok(())
    }

    pub fn container(&self, namespace: &str) -> Option<Container> {
        self.namespaces.get(namespace).cloned()
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// **NAMESPACE NAMES** - Sorted for stable output
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self.namespaces.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
