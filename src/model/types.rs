//! Closed type tag enumeration

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic classification of a value
///
/// Exactly one tag is associated with any value at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeTag {
    /// The "no value yet" sentinel
    Undefined,
    /// The explicit "no value" sentinel
    Null,
    /// Boolean primitive or boxed boolean
    Boolean,
    /// Number primitive or boxed number, `NaN` included
    Number,
    /// String primitive or boxed string
    String,
    /// Plain key-value record, class instance or weak collection
    Object,
    /// Array
    Array,
    /// Callable, constructors included
    Function,
    /// Date
    Date,
    /// Regular expression
    #[serde(rename = "regexp")]
    RegExp,
    /// Error and its subclasses
    Error,
    /// Keyed collection
    Map,
    /// Unique value collection
    Set,
    /// Generator object produced by calling a generator function
    Generator,
    /// Generator function
    GeneratorFunction,
}

impl TypeTag {
    /// Every tag, in declaration order
    pub const ALL: [TypeTag; 15] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::Function,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Error,
        TypeTag::Map,
        TypeTag::Set,
        TypeTag::Generator,
        TypeTag::GeneratorFunction,
    ];

    /// Canonical name of the tag
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Function => "function",
            TypeTag::Date => "date",
            TypeTag::RegExp => "regexp",
            TypeTag::Error => "error",
            TypeTag::Map => "map",
            TypeTag::Set => "set",
            TypeTag::Generator => "generator",
            TypeTag::GeneratorFunction => "generatorFunction",
        }
    }

    /// Check if this tag classifies one of the absence sentinels
    pub fn is_absent(self) -> bool {
        matches!(self, TypeTag::Undefined | TypeTag::Null)
    }

    /// Check if this tag classifies something callable
    pub fn is_callable(self) -> bool {
        matches!(self, TypeTag::Function | TypeTag::GeneratorFunction)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| CheckError::UnknownTypeTag {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_are_distinct() {
        let unique: HashSet<_> = TypeTag::ALL.iter().collect();
        assert_eq!(unique.len(), TypeTag::ALL.len());
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.name().parse::<TypeTag>(), Ok(tag));
            assert_eq!(tag.to_string(), tag.name());
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            "symbol".parse::<TypeTag>(),
            Err(CheckError::UnknownTypeTag {
                name: "symbol".to_string()
            })
        );
        // names are case sensitive
        assert!("Array".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        assert_eq!(
            serde_json::to_string(&TypeTag::RegExp).unwrap(),
            "\"regexp\""
        );
        assert_eq!(
            serde_json::to_string(&TypeTag::GeneratorFunction).unwrap(),
            "\"generatorFunction\""
        );
        let tag: TypeTag = serde_json::from_str("\"map\"").unwrap();
        assert_eq!(tag, TypeTag::Map);
    }

    #[test]
    fn test_tag_classes() {
        assert!(TypeTag::Null.is_absent());
        assert!(TypeTag::Undefined.is_absent());
        assert!(!TypeTag::Object.is_absent());
        assert!(TypeTag::GeneratorFunction.is_callable());
        assert!(!TypeTag::Generator.is_callable());
    }
}
