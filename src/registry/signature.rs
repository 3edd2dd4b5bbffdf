//! Predicate signatures for arity checking and documentation

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a parameter expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    /// Any value
    Any,
    /// A constructor reference
    Constructor,
    /// A string naming a type tag
    TypeTag,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Any => write!(f, "any"),
            ParameterKind::Constructor => write!(f, "constructor"),
            ParameterKind::TypeTag => write!(f, "tag"),
        }
    }
}

/// Parameter information for predicates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Expected argument
    pub kind: ParameterKind,
    /// Whether this parameter is optional
    pub optional: bool,
}

impl ParameterInfo {
    /// Create a required parameter
    pub fn required(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
        }
    }

    /// Create an optional parameter
    pub fn optional(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: true,
        }
    }
}

/// Predicate signature; every predicate returns a boolean
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Predicate name
    pub name: String,
    /// Parameters
    pub parameters: Vec<ParameterInfo>,
    /// Minimum number of arguments
    pub min_arity: usize,
    /// Maximum number of arguments
    pub max_arity: usize,
}

impl FunctionSignature {
    /// Create a new signature
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterInfo>) -> Self {
        let min_arity = parameters.iter().filter(|p| !p.optional).count();
        let max_arity = parameters.len();
        Self {
            name: name.into(),
            parameters,
            min_arity,
            max_arity,
        }
    }

    /// Signature of a single-value predicate
    pub fn unary(name: impl Into<String>) -> Self {
        Self::new(name, vec![ParameterInfo::required("value", ParameterKind::Any)])
    }

    /// Check if the argument count is acceptable
    pub fn accepts(&self, arg_count: usize) -> bool {
        (self.min_arity..=self.max_arity).contains(&arg_count)
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.kind)?;
            if param.optional {
                write!(f, "?")?;
            }
        }
        write!(f, ") -> boolean")
    }
}
