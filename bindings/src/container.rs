use autowire::api::{resolve_signature, InjectionError, TypeKey, TypedRegistry};
use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyType};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::introspect::introspect_constructor;

// Object counter for tracking
static REGISTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Catch panics at the FFI boundary; a Rust panic must never unwind into the
/// Python interpreter.
fn catch_panic<F, R>(f: F) -> PyResult<R>
where
    F: FnOnce() -> PyResult<R>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => Err(PyRuntimeError::new_err(
            "Rust panic occurred in autowire bindings",
        )),
    }
}

pub(crate) fn injection_error_to_py(err: InjectionError) -> PyErr {
    match err {
        InjectionError::UnresolvedDependency { .. } => PyValueError::new_err(err.to_string()),
        InjectionError::MalformedConstructor { .. } => PyTypeError::new_err(err.to_string()),
    }
}

/// **PYTHON TYPED REGISTRY**
///
/// **PURPOSE**: Bridge the type-keyed singleton registry to Python
/// **GUARANTEE**: Thread-safe registration and resolution across the FFI boundary
#[pyclass]
pub struct PyTypedRegistry {
    // Read-mostly: registration happens at startup, resolution afterwards.
    inner: Arc<RwLock<TypedRegistry>>,
    // Keeps registered type objects alive so their addresses stay valid keys.
    type_objects: Arc<RwLock<HashMap<u64, Py<PyType>>>>,
    #[pyo3(get)]
    id: u64,
}

#[pymethods]
impl PyTypedRegistry {
    /// **CONSTRUCTOR**
    #[new]
    fn new() -> Self {
        let id = REGISTRY_COUNTER.fetch_add(1, Ordering::SeqCst);

        #[cfg(debug_assertions)]
        log::debug!("Creating PyTypedRegistry {}", id);

        Self {
            inner: Arc::new(RwLock::new(TypedRegistry::new())),
            type_objects: Arc::new(RwLock::new(HashMap::new())),
            id,
        }
    }

    /// **REGISTER VALUE**
    ///
    /// Stores `obj` under its concrete Python type. A later registration of
    /// the same type silently replaces the earlier one.
    fn register(&self, obj: &Bound<'_, PyAny>) -> PyResult<()> {
        catch_panic(|| {
            let ty = obj.get_type();
            let tag = ty.as_ptr() as u64;
            let name = ty.qualname()?.to_string();
            let key = TypeKey::foreign(tag, name.clone());

            #[cfg(debug_assertions)]
            log::debug!("PyTypedRegistry {}: registering {}", self.id, name);

            {
                let mut type_objects = self
                    .type_objects
                    .write()
                    .map_err(|_| PyRuntimeError::new_err("Failed to acquire write lock"))?;
                type_objects.insert(tag, ty.clone().unbind());
            }

            let value: Arc<dyn Any + Send + Sync> = Arc::new(obj.clone().unbind());
            let mut registry = self
                .inner
                .write()
                .map_err(|_| PyRuntimeError::new_err("Failed to acquire registry lock"))?;
            registry.register_keyed(key, value);
            Ok(())
        })
    }

    /// **CREATE INSTANCE**
    ///
    /// Introspects `cls.__init__`, resolves every annotated parameter against
    /// the registered singletons, and calls `cls` with keyword arguments.
    ///
    /// Raises `TypeError` for an unusable constructor declaration and
    /// `ValueError` for a missing registration.
    fn create_instance(&self, py: Python<'_>, cls: &Bound<'_, PyType>) -> PyResult<PyObject> {
        catch_panic(|| {
            let signature = introspect_constructor(py, cls)?;

            #[cfg(debug_assertions)]
            log::debug!(
                "PyTypedRegistry {}: resolving {} parameter(s) for {}",
                self.id,
                signature.arity(),
                signature.target().name()
            );

            let mut args = {
                let registry = self
                    .inner
                    .read()
                    .map_err(|_| PyRuntimeError::new_err("Failed to acquire registry lock"))?;
                resolve_signature(&registry, &signature).map_err(injection_error_to_py)?
            };

            let kwargs = PyDict::new(py);
            for parameter in signature.parameters() {
                let value = args
                    .take::<Py<PyAny>>()
                    .map_err(injection_error_to_py)?;
                kwargs.set_item(parameter.name(), value.clone_ref(py))?;
            }

            let instance = cls.call((), Some(&kwargs))?;
            Ok(instance.unbind())
        })
    }

    /// **REGISTERED TYPE NAMES**
    fn registered_types(&self) -> PyResult<Vec<String>> {
        catch_panic(|| {
            let registry = self
                .inner
                .read()
                .map_err(|_| PyRuntimeError::new_err("Failed to acquire registry lock"))?;
            Ok(registry.registered_type_names())
        })
    }

    fn __len__(&self) -> PyResult<usize> {
        let registry = self
            .inner
            .read()
            .map_err(|_| PyRuntimeError::new_err("Failed to acquire registry lock"))?;
        Ok(registry.len())
    }

    fn __repr__(&self) -> PyResult<String> {
        let count = self.__len__()?;
        Ok(format!("PyTypedRegistry(id={}, registered={})", self.id, count))
    }
}

impl Drop for PyTypedRegistry {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let count = self.inner.read().map(|registry| registry.len()).unwrap_or(0);
            log::debug!("Dropping PyTypedRegistry {} with {} registrations", self.id, count);
        }
    }
}
