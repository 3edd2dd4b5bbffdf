//! Predicate trait and registry

use crate::model::Value;
use crate::registry::signature::FunctionSignature;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Invalid number of arguments
    #[error("Function '{name}' expects {min}-{max} arguments, got {actual}")]
    InvalidArity {
        /// Function name
        name: String,
        /// Minimum arguments
        min: usize,
        /// Maximum arguments
        max: usize,
        /// Actual arguments provided
        actual: usize,
    },

    /// No function registered under the name
    #[error("Unknown function '{name}'")]
    UnknownFunction {
        /// Requested name
        name: String,
    },
}

/// A named predicate
pub trait PredicateFunction: Send + Sync {
    /// Get the function name
    fn name(&self) -> &str;

    /// Get the human-friendly name for the function
    fn human_friendly_name(&self) -> &str;

    /// Get the function signature
    fn signature(&self) -> &FunctionSignature;

    /// Evaluate the predicate
    fn evaluate(&self, args: &[Value]) -> FunctionResult<bool>;

    /// Get function documentation
    fn documentation(&self) -> &str {
        ""
    }

    /// Validate the argument count against the signature
    fn validate_args(&self, args: &[Value]) -> FunctionResult<()> {
        let sig = self.signature();
        if sig.accepts(args.len()) {
            Ok(())
        } else {
            Err(FunctionError::InvalidArity {
                name: self.name().to_string(),
                min: sig.min_arity,
                max: sig.max_arity,
                actual: args.len(),
            })
        }
    }
}

/// Name-indexed collection of predicates
///
/// An alias shares the exact registry entry of its target.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn PredicateFunction>>,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.function_names())
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its own name, replacing any previous entry
    pub fn register<F: PredicateFunction + 'static>(&mut self, function: F) {
        let name = function.name().to_string();
        log::debug!("registering predicate '{name}'");
        self.functions.insert(name, Arc::new(function));
    }

    /// Bind `alias` to the entry registered as `target`
    pub fn register_alias(&mut self, alias: impl Into<String>, target: &str) -> FunctionResult<()> {
        let function = self
            .get(target)
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: target.to_string(),
            })?;
        let alias = alias.into();
        log::debug!("binding alias '{alias}' to '{target}'");
        self.functions.insert(alias, function);
        Ok(())
    }

    /// Look a function up by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn PredicateFunction>> {
        self.functions.get(name).cloned()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, aliases included, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up and evaluate a predicate
    pub fn evaluate(&self, name: &str, args: &[Value]) -> FunctionResult<bool> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: name.to_string(),
            })?;
        let result = function.evaluate(args)?;
        log::trace!("{name} with {} argument(s) -> {result}", args.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTrue;

    impl PredicateFunction for AlwaysTrue {
        fn name(&self) -> &str {
            "alwaysTrue"
        }
        fn human_friendly_name(&self) -> &str {
            "Always True"
        }
        fn signature(&self) -> &FunctionSignature {
            static SIG: std::sync::LazyLock<FunctionSignature> =
                std::sync::LazyLock::new(|| FunctionSignature::unary("alwaysTrue"));
            &SIG
        }
        fn evaluate(&self, args: &[Value]) -> FunctionResult<bool> {
            self.validate_args(args)?;
            Ok(true)
        }
    }

    #[test]
    fn test_register_and_evaluate() {
        let mut registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        registry.register(AlwaysTrue);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.evaluate("alwaysTrue", &[Value::Null]), Ok(true));
    }

    #[test]
    fn test_arity_is_checked() {
        let mut registry = FunctionRegistry::new();
        registry.register(AlwaysTrue);
        assert_eq!(
            registry.evaluate("alwaysTrue", &[]),
            Err(FunctionError::InvalidArity {
                name: "alwaysTrue".to_string(),
                min: 1,
                max: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_alias_shares_the_entry() {
        let mut registry = FunctionRegistry::new();
        registry.register(AlwaysTrue);
        registry.register_alias("yes", "alwaysTrue").unwrap();
        let target = registry.get("alwaysTrue").unwrap();
        let alias = registry.get("yes").unwrap();
        assert!(Arc::ptr_eq(&target, &alias));
        assert_eq!(registry.function_names(), vec!["alwaysTrue", "yes"]);
    }

    #[test]
    fn test_unknown_names() {
        let mut registry = FunctionRegistry::new();
        assert_eq!(
            registry.register_alias("x", "missing"),
            Err(FunctionError::UnknownFunction {
                name: "missing".to_string()
            })
        );
        assert!(matches!(
            registry.evaluate("missing", &[]),
            Err(FunctionError::UnknownFunction { .. })
        ));
    }
}
