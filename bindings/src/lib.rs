//! Python FFI surface for the autowire dependency injection core.
//!
//! Exposes the typed registry to Python with the reflective contract the
//! original dynamic runtime offers: values are keyed by their concrete Python
//! type, and `create_instance` introspects `__init__` annotations to decide
//! what to inject.

use pyo3::prelude::*;

mod container;
mod introspect;

use container::PyTypedRegistry;

#[pymodule]
fn _rust_lib(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let _ = env_logger::try_init();
    m.add_class::<PyTypedRegistry>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
