// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-type predicates

use super::comparison::instance_of;
use super::existence::exists;
use crate::model::{Builtin, Constructor, TypeTag, Value, get_type};

/// Returns `true` if the value resolves to the given tag
pub fn is_type(value: &Value, tag: TypeTag) -> bool {
    get_type(value) == tag
}

macro_rules! tag_predicate {
    ($($(#[$meta:meta])* $name:ident => $tag:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(value: &Value) -> bool {
                is_type(value, TypeTag::$tag)
            }
        )*
    };
}

tag_predicate! {
    /// Returns `true` for arrays
    is_array => Array,
    /// Returns `true` for boolean primitives and boxed booleans
    is_boolean => Boolean,
    /// Returns `true` for dates
    is_date => Date,
    /// Returns `true` for functions, constructor references included
    is_function => Function,
    /// Returns `true` for generator objects
    is_generator => Generator,
    /// Returns `true` for generator functions
    is_generator_function => GeneratorFunction,
    /// Returns `true` for maps
    is_map => Map,
    /// Returns `true` for numbers and boxed numbers, `NaN` included
    is_number => Number,
    /// Returns `true` for plain objects and class instances without a
    /// more specific built-in base
    is_object => Object,
    /// Returns `true` for regular expressions
    is_regexp => RegExp,
    /// Returns `true` for sets
    is_set => Set,
    /// Returns `true` for string primitives and boxed strings
    is_string => String,
}

/// Returns `true` for errors: the error tag, or any instance of `Error`
pub fn is_error(value: &Value) -> bool {
    is_type(value, TypeTag::Error) || instance_of(value, &Constructor::Builtin(Builtin::Error))
}

/// Returns `true` if the value carries a callable iteration protocol member
pub fn is_iterable(value: &Value) -> bool {
    exists(value) && get_type(&value.iterator_member()).is_callable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, Function, ObjectBuilder};

    #[test]
    fn test_nan_is_a_number() {
        assert!(is_number(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_error_detected_through_prototype_alone() {
        // like `Object.create(TypeError.prototype)`: no error layout
        let value = ObjectBuilder::new().constructor(Builtin::TypeError).build();
        assert!(!is_type(&value, TypeTag::Error));
        assert!(is_error(&value));
    }

    #[test]
    fn test_iterable_member_must_be_callable() {
        let broken = Value::object().iterator(1).build();
        assert!(!is_iterable(&broken));
        let generated = Value::object()
            .iterator(Function::generator("[Symbol.iterator]", 0))
            .build();
        assert!(is_iterable(&generated));
    }

    #[test]
    fn test_iterable_classes() {
        let bag = Class::new("Bag").build();
        assert!(!is_iterable(&bag.instantiate().build()));
        let list = Class::new("List")
            .iterator(Function::arrow("[Symbol.iterator]", 0))
            .build();
        assert!(is_iterable(&list.instantiate().build()));
        // the class itself is not iterable, its instances are
        assert!(!is_iterable(&list.into()));
    }
}
