//! # AUTOWIRE CORE LIBRARY
//!
//! **TYPE-DIRECTED DEPENDENCY INJECTION CORE**
//!
//! **ARCHITECTURE**: Typed singleton registry plus descriptor-driven constructor resolution
//! **GUARANTEE**: Deterministic, fail-fast resolution with no partial construction
//! **COMPATIBILITY**: Foreign-host type keys for FFI bindings (see `autowire-bindings`)

pub mod api;
pub mod errors;
pub mod injection;
pub mod report;
