//! Reflective constructor introspection for Python classes.
//!
//! Recovers the dynamic half of the contract on the Python side of the FFI:
//! `inspect.signature` supplies the parameter list, `typing.get_type_hints`
//! the declared types. Every formal parameter must carry a concrete class
//! annotation; anything else is a malformed constructor declaration.

use autowire::api::{ConstructorSignature, InjectionError, ParameterDescriptor, TypeKey};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyType};

use crate::container::injection_error_to_py;

pub(crate) fn introspect_constructor(
    py: Python<'_>,
    cls: &Bound<'_, PyType>,
) -> PyResult<ConstructorSignature> {
    let target_name = cls.qualname()?.to_string();

    let inspect = py.import("inspect")?;
    let typing = py.import("typing")?;
    let parameter_cls = inspect.getattr("Parameter")?;
    let var_positional = parameter_cls.getattr("VAR_POSITIONAL")?;
    let var_keyword = parameter_cls.getattr("VAR_KEYWORD")?;

    let init = cls.getattr("__init__")?;
    let signature = inspect.call_method1("signature", (&init,))?;
    let hints = typing.call_method1("get_type_hints", (&init,))?;
    let hints = hints.downcast::<PyDict>().map_err(PyErr::from)?;

    let mut parameters = Vec::new();
    let values = signature.getattr("parameters")?.call_method0("values")?;
    for item in values.try_iter()? {
        let parameter = item?;
        let name: String = parameter.getattr("name")?.extract()?;
        if name == "self" {
            continue;
        }

        let kind = parameter.getattr("kind")?;
        if kind.eq(&var_positional)? || kind.eq(&var_keyword)? {
            return Err(malformed(
                &target_name,
                format!(
                    "variadic parameter '{}' cannot carry a concrete declared type",
                    name
                ),
            ));
        }

        let Some(annotation) = hints.get_item(&name)? else {
            return Err(malformed(
                &target_name,
                format!("parameter '{}' lacks a type annotation", name),
            ));
        };
        let declared = match annotation.downcast::<PyType>() {
            Ok(ty) => TypeKey::foreign(ty.as_ptr() as u64, ty.qualname()?.to_string()),
            Err(_) => {
                return Err(malformed(
                    &target_name,
                    format!("parameter '{}' is not annotated with a concrete class", name),
                ));
            }
        };
        parameters.push(ParameterDescriptor::new(name, declared));
    }

    Ok(ConstructorSignature::new(
        TypeKey::foreign(cls.as_ptr() as u64, target_name),
        parameters,
    ))
}

fn malformed(target: &str, message: String) -> PyErr {
    injection_error_to_py(InjectionError::MalformedConstructor {
        target: target.to_string(),
        message,
    })
}
