use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::types::TypeKey;

/// Type-keyed singleton store: at most one value per distinct type identity.
///
/// Values are immutable once registered and handed out as `Arc` clones, so
/// every resolution observes the identical registered instance. Registration
/// never fails; a later registration of the same type identity silently
/// replaces the earlier one.
pub struct TypedRegistry {
    entries: HashMap<TypeKey, Arc<dyn Any + Send + Sync>>,
}

impl TypedRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store `value` under its concrete runtime type identity.
    pub fn register<T: Send + Sync + 'static>(&mut self, value: T) {
        self.register_arc(Arc::new(value));
    }

    /// Register an already shared handle, for callers that keep a reference
    /// to the singleton.
    pub fn register_arc<T: Send + Sync + 'static>(&mut self, value: Arc<T>) {
        self.register_keyed(TypeKey::of::<T>(), value);
    }

    /// Raw entry point used by the typed methods above and by foreign-host
    /// bindings that key values with [`TypeKey::foreign`].
    pub fn register_keyed(&mut self, key: TypeKey, value: Arc<dyn Any + Send + Sync>) {
        let name = key.name().to_string();
        if self.entries.insert(key, value).is_some() {
            log::debug!("registry: replaced existing value for {}", name);
        } else {
            log::debug!("registry: registered {}", name);
        }
    }

    /// Retrieve the registered value of type `T`. Absence is `None`, never an
    /// error; presence is tracked independently of value contents.
    pub fn lookup<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.lookup_keyed(&TypeKey::of::<T>())
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// Retrieve by explicit type key. O(1) expected time.
    pub fn lookup_keyed(&self, key: &TypeKey) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries.get(key).cloned()
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeKey::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names of all registered types, sorted for stable output.
    pub fn registered_type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .keys()
            .map(|key| key.name().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TypedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Config {
        retries: u32,
    }

    struct Marker;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypedRegistry::new();
        registry.register(Config { retries: 3 });

        let config = registry.lookup::<Config>().unwrap();
        assert_eq!(config.retries, 3);
        assert!(registry.contains::<Config>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_absent_type_is_none() {
        let registry = TypedRegistry::new();
        assert!(registry.lookup::<Config>().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = TypedRegistry::new();
        registry.register(Config { retries: 1 });
        registry.register(Config { retries: 2 });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup::<Config>().unwrap().retries, 2);
    }

    #[test]
    fn test_zero_sized_value_is_still_present() {
        let mut registry = TypedRegistry::new();
        registry.register(Marker);
        assert!(registry.contains::<Marker>());
        assert!(registry.lookup::<Marker>().is_some());
    }

    #[test]
    fn test_register_arc_preserves_identity() {
        let mut registry = TypedRegistry::new();
        let shared = Arc::new(Config { retries: 9 });
        registry.register_arc(Arc::clone(&shared));

        let looked_up = registry.lookup::<Config>().unwrap();
        assert!(Arc::ptr_eq(&shared, &looked_up));
    }

    #[test]
    fn test_foreign_keys_match_by_tag_not_name() {
        let mut registry = TypedRegistry::new();
        registry.register_keyed(
            TypeKey::foreign(7, "ExternalConfig"),
            Arc::new(41u32) as Arc<dyn Any + Send + Sync>,
        );

        let value = registry
            .lookup_keyed(&TypeKey::foreign(7, "SameTagOtherName"))
            .unwrap();
        assert_eq!(*value.downcast::<u32>().unwrap(), 41);
        assert!(registry.lookup_keyed(&TypeKey::foreign(8, "ExternalConfig")).is_none());
    }

    #[test]
    fn test_registered_type_names_are_sorted() {
        let mut registry = TypedRegistry::new();
        registry.register_keyed(
            TypeKey::foreign(2, "Zeta"),
            Arc::new(()) as Arc<dyn Any + Send + Sync>,
        );
        registry.register_keyed(
            TypeKey::foreign(1, "Alpha"),
            Arc::new(()) as Arc<dyn Any + Send + Sync>,
        );
        assert_eq!(registry.registered_type_names(), vec!["Alpha", "Zeta"]);
    }
}
