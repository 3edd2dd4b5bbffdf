//! Predicate registry
//!
//! Name-indexed access to the predicate set for hosts that dispatch by
//! name, such as the command line tool.

pub mod function;
pub mod functions;
pub mod signature;

pub use function::{FunctionError, FunctionRegistry, FunctionResult, PredicateFunction};
pub use signature::{FunctionSignature, ParameterInfo, ParameterKind};

/// Create a registry holding every predicate and its aliases
pub fn create_standard_registry() -> FunctionResult<FunctionRegistry> {
    let mut registry = FunctionRegistry::new();
    functions::register_standard_functions(&mut registry)?;
    Ok(registry)
}
