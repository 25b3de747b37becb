use super::types::{ConstructorSignature, ResolvedArguments};
use crate::errors::InjectionError;

/// A consumer type whose constructor dependencies are auto-resolved.
///
/// Rust has no runtime constructor reflection, so each consumer supplies its
/// own parameter-descriptor table. The [`injectable!`](macro@crate::injectable)
/// macro generates both methods from a field list; hand-written impls must
/// consume arguments in the exact order the signature declares them.
pub trait Injectable: Sized + 'static {
    /// The constructor's declared shape: one descriptor per dependency, in
    /// declaration order, receiver excluded.
    fn signature() -> ConstructorSignature;

    /// Build the instance from the resolved argument set.
    fn construct(args: &mut ResolvedArguments) -> Result<Self, InjectionError>;
}

/// Generates an [`Injectable`] impl from a field list.
///
/// Each listed field must be declared on the struct as `Arc<DepType>`;
/// registered singletons are shared, never copied. A zero-field list declares
/// a consumer with no dependencies, which resolves against any registry,
/// including an empty one.
///
/// ```
/// use std::sync::Arc;
/// use autowire::injection::Container;
///
/// struct Config { retries: u32 }
/// struct Client { config: Arc<Config> }
/// autowire::injectable!(Client { config: Config });
///
/// let mut container = Container::new();
/// container.register(Config { retries: 3 });
/// let client = container.create_instance::<Client>().unwrap();
/// assert_eq!(client.config.retries, 3);
/// ```
#[macro_export]
macro_rules! injectable {
    ($target:ty { $($field:ident: $dependency:ty),* $(,)? }) => {
        impl $crate::injection::Injectable for $target {
            fn signature() -> $crate::injection::ConstructorSignature {
                $crate::injection::ConstructorSignature::new(
                    $crate::injection::TypeKey::of::<$target>(),
                    vec![
                        $(
                            $crate::injection::ParameterDescriptor::new(
                                stringify!($field),
                                $crate::injection::TypeKey::of::<$dependency>(),
                            ),
                        )*
                    ],
                )
            }

            fn construct(
                _args: &mut $crate::injection::ResolvedArguments,
            ) -> Result<Self, $crate::errors::InjectionError> {
                Ok(Self {
                    $($field: _args.take::<$dependency>()?,)*
                })
            }
        }
    };
}
