//! Variant dispatch
//!
//! Registries map a key to a zero-argument constructor. Lookups are exact and
//! fail closed: an unknown key is a `Configuration` error, never a fallback to
//! some default variant. Registering the same key twice is rejected rather
//! than replacing the earlier constructor.

use crate::creator::{Creator, ProductLine};
use crate::error::{CreationError, Result};
use crate::family::FamilyFactory;
use crate::variant::VariantKey;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

type Constructor<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

/// Keyed constructor table shared by both registry kinds
struct ConstructorTable<T: ?Sized> {
    name: String,
    entries: DashMap<VariantKey, Constructor<T>>,
}

impl<T: ?Sized> ConstructorTable<T> {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: DashMap::new(),
        }
    }

    fn register(&self, key: VariantKey, ctor: Constructor<T>) -> Result<()> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Err(CreationError::DuplicateVariant {
                registry: self.name.clone(),
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(registry = %self.name, key = %entry.key(), "Constructor registered");
                entry.insert(ctor);
                Ok(())
            }
        }
    }

    /// Run the constructor for `key`. The shard lock is released before the
    /// constructor runs so constructors may consult the registry themselves.
    fn construct(&self, key: &str) -> Result<Arc<T>> {
        let ctor = self
            .entries
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| CreationError::unknown(self.name.as_str(), key))?;
        Ok(ctor())
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn keys(&self) -> Vec<VariantKey> {
        let mut keys: Vec<VariantKey> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Registry of concrete factories for one family, keyed by variant
pub struct FactoryRegistry<F: ?Sized + FamilyFactory> {
    table: ConstructorTable<F>,
}

impl<F: ?Sized + FamilyFactory> FactoryRegistry<F> {
    /// Create an empty registry; `name` identifies the family in errors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: ConstructorTable::new(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Register the constructor of the factory for `variant`
    pub fn register<C>(&self, variant: impl Into<VariantKey>, ctor: C) -> Result<()>
    where
        C: Fn() -> Arc<F> + Send + Sync + 'static,
    {
        self.table.register(variant.into(), Arc::new(ctor))
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<C>(self, variant: impl Into<VariantKey>, ctor: C) -> Result<Self>
    where
        C: Fn() -> Arc<F> + Send + Sync + 'static,
    {
        self.register(variant, ctor)?;
        Ok(self)
    }

    /// Resolve the factory registered for `variant`.
    ///
    /// Fails with `Configuration` when nothing is registered under the key and
    /// with `MisboundFactory` when the constructor built a factory for some
    /// other variant.
    pub fn resolve_factory(&self, variant: &str) -> Result<Arc<F>> {
        let factory = self.table.construct(variant)?;
        let produced = factory.variant();
        if produced != *variant {
            return Err(CreationError::MisboundFactory {
                registry: self.table.name.clone(),
                requested: VariantKey::from(variant),
                produced,
            });
        }
        debug!(family = %self.table.name, variant, "Factory resolved");
        Ok(factory)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.table.contains(variant)
    }

    /// Registered variants in sorted order
    pub fn variants(&self) -> Vec<VariantKey> {
        self.table.keys()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry of concrete creators for one product line, keyed by creator name
pub struct CreatorRegistry<L: ProductLine> {
    table: ConstructorTable<dyn Creator<Line = L>>,
}

impl<L: ProductLine> CreatorRegistry<L> {
    /// Create an empty registry; `name` identifies the product line in errors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: ConstructorTable::new(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Register the constructor of the creator named `key`
    pub fn register<C>(&self, key: impl Into<VariantKey>, ctor: C) -> Result<()>
    where
        C: Fn() -> Arc<dyn Creator<Line = L>> + Send + Sync + 'static,
    {
        self.table.register(key.into(), Arc::new(ctor))
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<C>(self, key: impl Into<VariantKey>, ctor: C) -> Result<Self>
    where
        C: Fn() -> Arc<dyn Creator<Line = L>> + Send + Sync + 'static,
    {
        self.register(key, ctor)?;
        Ok(self)
    }

    /// Resolve the creator registered under `key`; `Configuration` on miss
    pub fn resolve_creator(&self, key: &str) -> Result<Arc<dyn Creator<Line = L>>> {
        let creator = self.table.construct(key)?;
        debug!(line = %self.table.name, creator = key, "Creator resolved");
        Ok(creator)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Registered creator keys in sorted order
    pub fn keys(&self) -> Vec<VariantKey> {
        self.table.keys()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
