use std::any::{Any, TypeId};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::errors::InjectionError;

/// Stable, comparable token identifying one concrete type.
///
/// Identity is the token alone; the name travels with the key for diagnostics
/// and is excluded from equality and hashing, so same-named types in
/// different scopes never collide.
#[derive(Debug, Clone)]
pub struct TypeKey {
    identity: TypeIdentity,
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TypeIdentity {
    /// Rust-native runtime type handle.
    Native(TypeId),
    /// Host-runtime type handle bridged across FFI, e.g. a CPython type
    /// object address. The tag must stay stable for the registry's lifetime.
    Foreign(u64),
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            identity: TypeIdentity::Native(TypeId::of::<T>()),
            name: std::any::type_name::<T>().to_string(),
        }
    }

    pub fn foreign(tag: u64, name: impl Into<String>) -> Self {
        Self {
            identity: TypeIdentity::Foreign(tag),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for TypeKey {}

impl std::hash::Hash for TypeKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

/// One formal constructor parameter: a name for diagnostics and the declared
/// type identity used for matching. Matching never uses the name.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    name: String,
    declared: TypeKey,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, declared: TypeKey) -> Self {
        Self {
            name: name.into(),
            declared,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &TypeKey {
        &self.declared
    }
}

/// A target type plus its ordered parameter descriptors, receiver excluded.
#[derive(Debug, Clone)]
pub struct ConstructorSignature {
    target: TypeKey,
    parameters: Vec<ParameterDescriptor>,
}

impl ConstructorSignature {
    pub fn new(target: TypeKey, parameters: Vec<ParameterDescriptor>) -> Self {
        Self { target, parameters }
    }

    pub fn target(&self) -> &TypeKey {
        &self.target
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Structural checks on the declared parameter list. Duplicate names are
    /// never used for disambiguation, so a declaration carrying one is
    /// malformed rather than silently accepted.
    pub fn validate(&self) -> Result<(), InjectionError> {
        let mut seen = std::collections::HashSet::new();
        for parameter in &self.parameters {
            if parameter.name().is_empty() {
                return Err(InjectionError::MalformedConstructor {
                    target: self.target.name().to_string(),
                    message: "parameter with empty name".to_string(),
                });
            }
            if !seen.insert(parameter.name()) {
                return Err(InjectionError::MalformedConstructor {
                    target: self.target.name().to_string(),
                    message: format!("duplicate parameter name '{}'", parameter.name()),
                });
            }
        }
        Ok(())
    }
}

/// Ordered argument set produced by resolution and consumed by construction.
///
/// Arguments are handed out strictly in declaration order. Consuming the
/// wrong type, or more or fewer arguments than the signature declared, means
/// the declared shape does not match the constructor: a malformed-constructor
/// condition, not a resolution failure.
pub struct ResolvedArguments {
    target: String,
    values: VecDeque<Arc<dyn Any + Send + Sync>>,
    consumed: usize,
}

impl ResolvedArguments {
    pub(crate) fn new(target: String, values: Vec<Arc<dyn Any + Send + Sync>>) -> Self {
        Self {
            target,
            values: values.into(),
            consumed: 0,
        }
    }

    /// Pop the next argument in declaration order as the declared type.
    pub fn take<T: Send + Sync + 'static>(&mut self) -> Result<Arc<T>, InjectionError> {
        let value = self.take_any()?;
        value
            .downcast::<T>()
            .map_err(|_| InjectionError::MalformedConstructor {
                target: self.target.clone(),
                message: format!(
                    "argument {} is not of the declared type {}",
                    self.consumed,
                    std::any::type_name::<T>()
                ),
            })
    }

    /// Pop the next argument without downcasting. Used by foreign-host
    /// bindings that carry opaque values.
    pub fn take_any(&mut self) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        match self.values.pop_front() {
            Some(value) => {
                self.consumed += 1;
                Ok(value)
            }
            None => Err(InjectionError::MalformedConstructor {
                target: self.target.clone(),
                message: format!(
                    "constructor consumed more arguments than the {} declared",
                    self.consumed
                ),
            }),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}
