use crate::config::ResolverConfig;
use crate::dependencies::types::{DependencyEntry, DependencyScope, Producer};
use crate::detour::create_detour;
use crate::errors::InjectError;
use crate::types::Value;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

struct ContainerInner {
    namespace: String,
    config: ResolverConfig,
    entries: RefCell<HashMap<String, Rc<DependencyEntry>>>,
    resolving: RefCell<Vec<String>>,
}

/// **DEPENDENCY CONTAINER**
///
/// **PURPOSE**: Name-unique dependency entries of one namespace
/// **GUARANTEE**: Singleton instances are computed at most once
#[derive(Clone)]
pub struct Container {
    inner: Rc<ContainerInner>,
}

/// Non-owning handle held by detour wrappers.
#[derive(Clone)]
pub struct WeakContainer {
    inner: Weak<ContainerInner>,
}

impl WeakContainer {
    pub fn upgrade(&self) -> Option<Container> {
        self.inner.upgrade().map(|inner| Container { inner })
    }
}

impl Container {
    pub fn new(namespace: impl Into<String>, config: ResolverConfig) -> Self {
        Self {
            inner: Rc::new(ContainerInner {
                namespace: namespace.into(),
                config,
                entries: RefCell::new(HashMap::new()),
                resolving: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.entries.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    /// **REGISTERED NAMES** - Sorted for stable output
    pub fn dependency_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.entries.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn downgrade(&self) -> WeakContainer {
        WeakContainer {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// **BATCH INSERTION**
    ///
    /// Every name is checked before anything is stored, so a duplicate leaves
    /// the container exactly as it was.
    pub(crate) fn insert_all(&self, producers: Vec<Producer>) -> Result<(), InjectError> {
        let mut seen = HashSet::new();
        for producer in &producers {
            if self.contains(&producer.name) || !seen.insert(producer.name.as_str()) {
                return Err(InjectError::DuplicateDependency {
                    namespace: self.inner.namespace.clone(),
                    name: producer.name.clone(),
                });
            }
        }

        for producer in producers {
            let wrapped = create_detour(self, &producer.func);
            log::debug!(
                "Registering dependency '{}' in namespace '{}' with scope {:?}",
                producer.name,
                self.inner.namespace,
                producer.scope
            );
            self.inner.entries.borrow_mut().insert(
                producer.name,
                Rc::new(DependencyEntry::new(wrapped, producer.scope)),
            );
        }

        Ok(())
    }

    /// **RESOLVE DEPENDENCY**
    ///
    /// **RETURNS**:
    /// - `Ok(None)` - No dependency registered under `name`
    /// - `Ok(Some(value))` - Produced (or cached singleton) value, whatever it is
    /// - `Err(..)` - Cycle, depth limit, or producer failure
    pub fn resolve(&self, name: &str) -> Result<Option<Value>, InjectError> {
        let entry = self.inner.entries.borrow().get(name).cloned();
        let Some(entry) = entry else {
            return Ok(None);
        };

        if let Some(instance) = entry.instance.get() {
            log::trace!("Resolved cached singleton '{}'", name);
            return Ok(Some(instance.clone()));
        }

        let _guard = ResolutionGuard::enter(&self.inner, name)?;
        log::trace!("Producing '{}' in namespace '{}'", name, self.inner.namespace);
        let value = entry.producer.call(&[])?;

        match entry.scope {
            DependencyScope::Singleton => Ok(Some(entry.instance.get_or_init(|| value).clone())),
            DependencyScope::Transient => Ok(Some(value)),
        }
    }
}

/// Tracks the names currently being produced; popped on drop so failed
/// producers leave the stack balanced.
struct ResolutionGuard<'a> {
    inner: &'a ContainerInner,
}

impl<'a> ResolutionGuard<'a> {
    fn enter(inner: &'a ContainerInner, name: &str) -> Result<Self, InjectError> {
        let mut resolving = inner.resolving.borrow_mut();

        if inner.config.detect_cycles && resolving.iter().any(|active| active == name) {
            let mut chain = resolving.clone();
            chain.push(name.to_string());
            return Err(InjectError::CircularDependency {
                chain: chain.join(" -> "),
            });
        }

        if resolving.len() >= inner.config.max_resolution_depth {
            return Err(InjectError::ResolutionDepthExceeded {
                name: name.to_string(),
                limit: inner.config.max_resolution_depth,
            });
        }

        resolving.push(name.to_string());
        Ok(Self { inner })
    }
}

impl Drop for ResolutionGuard<'_> {
    fn drop(&mut self) {
        self.inner.resolving.borrow_mut().pop();
    }
}
