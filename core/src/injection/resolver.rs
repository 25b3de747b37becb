use std::sync::Arc;

use super::injectable::Injectable;
use super::registry::TypedRegistry;
use super::types::{ConstructorSignature, ResolvedArguments};
use crate::errors::InjectionError;

/// Obtain and validate the declared constructor shape of a consumer type.
pub fn introspect<T: Injectable>() -> Result<ConstructorSignature, InjectionError> {
    let signature = T::signature();
    signature.validate()?;
    Ok(signature)
}

/// Match every descriptor against the registry, in declaration order.
///
/// Resolution is short-circuiting: the first unresolved parameter aborts the
/// whole call and later descriptors are not looked up. No defaults, no
/// partial binding, and no recursive construction of missing dependencies;
/// the registry holds only already-constructed leaf values.
pub fn resolve_signature(
    registry: &TypedRegistry,
    signature: &ConstructorSignature,
) -> Result<ResolvedArguments, InjectionError> {
    let mut values = Vec::with_capacity(signature.arity());
    for parameter in signature.parameters() {
        match registry.lookup_keyed(parameter.declared_type()) {
            Some(value) => values.push(value),
            None => {
                return Err(InjectionError::UnresolvedDependency {
                    target: signature.target().name().to_string(),
                    parameter: parameter.name().to_string(),
                    missing: parameter.declared_type().name().to_string(),
                });
            }
        }
    }

    log::debug!(
        "resolver: bound {} argument(s) for {}",
        signature.arity(),
        signature.target().name()
    );
    Ok(ResolvedArguments::new(
        signature.target().name().to_string(),
        values,
    ))
}

/// Resolve and construct one instance of `T` against `registry`.
///
/// Stateless: every call re-reads the consumer's declared signature, so
/// consumer types defined after the registry was populated resolve the same
/// as any other.
pub fn resolve<T: Injectable>(registry: &TypedRegistry) -> Result<T, InjectionError> {
    let signature = introspect::<T>()?;
    let mut args = resolve_signature(registry, &signature)?;
    let instance = T::construct(&mut args)?;
    if args.remaining() > 0 {
        return Err(InjectionError::MalformedConstructor {
            target: signature.target().name().to_string(),
            message: format!(
                "constructor consumed {} of {} resolved argument(s)",
                signature.arity() - args.remaining(),
                signature.arity()
            ),
        });
    }
    Ok(instance)
}

/// Facade owning a registry: register singletons at startup, then construct
/// consumer types on demand.
pub struct Container {
    registry: TypedRegistry,
}

impl Container {
    pub fn new() -> Self {
        Self {
            registry: TypedRegistry::new(),
        }
    }

    /// Register `value` under its concrete type identity. Never fails;
    /// last registration of a type wins.
    pub fn register<T: Send + Sync + 'static>(&mut self, value: T) {
        self.registry.register(value);
    }

    /// Register an already shared handle.
    pub fn register_arc<T: Send + Sync + 'static>(&mut self, value: Arc<T>) {
        self.registry.register_arc(value);
    }

    /// Construct an instance of `T`, resolving each declared dependency
    /// against the registered singletons.
    pub fn create_instance<T: Injectable>(&self) -> Result<T, InjectionError> {
        resolve::<T>(&self.registry)
    }

    pub fn registry(&self) -> &TypedRegistry {
        &self.registry
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
