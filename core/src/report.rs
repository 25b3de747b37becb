//! Serializable views of constructor signatures and registry contents.
//!
//! Purely observational diagnostics; no resolution behavior depends on them.

use serde::{Deserialize, Serialize};

use crate::injection::{ConstructorSignature, TypedRegistry};

/// One formal parameter as seen by introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterReport {
    pub name: String,
    pub declared_type: String,
}

/// The declared constructor shape of a consumer type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReport {
    pub target: String,
    pub parameters: Vec<ParameterReport>,
}

impl SignatureReport {
    pub fn from_signature(signature: &ConstructorSignature) -> Self {
        Self {
            target: signature.target().name().to_string(),
            parameters: signature
                .parameters()
                .iter()
                .map(|parameter| ParameterReport {
                    name: parameter.name().to_string(),
                    declared_type: parameter.declared_type().name().to_string(),
                })
                .collect(),
        }
    }
}

/// The set of registered type names at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub registered_types: Vec<String>,
}

impl RegistrySnapshot {
    pub fn from_registry(registry: &TypedRegistry) -> Self {
        Self {
            registered_types: registry.registered_type_names(),
        }
    }
}
