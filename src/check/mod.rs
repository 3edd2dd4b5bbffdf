//! The predicate set
//!
//! Pure, total functions over [`Value`](crate::model::Value). None of them
//! panics, stores its input or touches shared state.

mod comparison;
mod existence;
mod predicates;

pub use comparison::{instance, instance_of, is};
pub use existence::{empty, exists};
pub use predicates::{
    is_array, is_boolean, is_date, is_error, is_function, is_generator, is_generator_function,
    is_iterable, is_map, is_number, is_object, is_regexp, is_set, is_string, is_type,
};

/// Alias of [`is_regexp`]
pub use predicates::is_regexp as is_regex;
/// Alias of [`is_type`]
pub use predicates::is_type as r#type;
