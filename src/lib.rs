//! Runtime type predicates for dynamically typed values
//!
//! A value model of a prototype based runtime together with a family of
//! pure predicates over it: existence and emptiness checks, a type tag
//! resolver, per-type predicates, type equality and `instanceof`.
//!
//! ```
//! use valcheck::{Builtin, Value, empty, get_type, is, TypeTag};
//!
//! assert!(empty(&Value::from("")));
//! assert_eq!(get_type(&Value::map([("k", 1)])), TypeTag::Map);
//! assert!(is(&Value::date(chrono::Utc::now()), &Builtin::Date.into()));
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod model;
pub mod registry;

pub use check::{
    empty, exists, instance, instance_of, is, is_array, is_boolean, is_date, is_error,
    is_function, is_generator, is_generator_function, is_iterable, is_map, is_number, is_object,
    is_regex, is_regexp, is_set, is_string, is_type, r#type,
};
pub use error::{CheckError, Result};
pub use model::{
    Builtin, Class, Constructor, Function, InstanceShape, ObjectBuilder, Primitive, TypeTag,
    Value, get_type,
};
pub use registry::{FunctionError, FunctionRegistry, PredicateFunction, create_standard_registry};

/// Every type tag, in declaration order
pub fn types() -> &'static [TypeTag] {
    &TypeTag::ALL
}
