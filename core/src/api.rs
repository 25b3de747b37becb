pub use crate::errors::{error_codes, InjectionError};
pub use crate::injection::{
    introspect, resolve, resolve_signature, ConstructorSignature, Container, Injectable,
    ParameterDescriptor, ResolvedArguments, TypeKey, TypedRegistry,
};
pub use crate::report::{ParameterReport, RegistrySnapshot, SignatureReport};
