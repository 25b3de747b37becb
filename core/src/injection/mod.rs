pub mod injectable;
pub mod registry;
pub mod resolver;
pub mod types;

pub use injectable::Injectable;
pub use registry::TypedRegistry;
pub use resolver::{introspect, resolve, resolve_signature, Container};
pub use types::{ConstructorSignature, ParameterDescriptor, ResolvedArguments, TypeKey};
