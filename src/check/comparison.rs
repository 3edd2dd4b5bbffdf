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

//! Type equality and `instanceof`

use crate::model::{Constructor, InstanceShape, Value};

/// Returns `true` if both values, or the instances of both constructor
/// references, are of the same type
///
/// Each operand is normalized to the shape of the instances it represents,
/// so `is(&date, &Builtin::Date.into())` holds. Shapes sharing a constructor
/// match; otherwise their type tags decide.
pub fn is(a: &Value, b: &Value) -> bool {
    InstanceShape::of(a).same_type_as(&InstanceShape::of(b))
}

/// Host `instanceof`: `true` if `constructor` is a constructor reference found
/// in the value's constructor chain
///
/// Primitives are never instances, not even of their wrapper constructors.
/// A right-hand side that is not a constructor yields `false`.
pub fn instance(value: &Value, constructor: &Value) -> bool {
    constructor
        .as_constructor()
        .is_some_and(|constructor| instance_of(value, constructor))
}

/// Typed form of [`instance`]
///
/// Accepts when the constructor chain of the value, or of any object in its
/// prototype chain, contains `constructor`.
pub fn instance_of(value: &Value, constructor: &Constructor) -> bool {
    value.as_object().is_some_and(|object| {
        std::iter::once(object)
            .chain(object.prototypes())
            .any(|link| link.constructor().is_subclass_of(constructor))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Builtin, Class, Primitive};

    #[test]
    fn test_is_is_symmetric_for_constructor_references() {
        let date = Value::date(chrono::Utc::now());
        let ctor = Value::from(Builtin::Date);
        assert!(is(&date, &ctor));
        assert!(is(&ctor, &date));
        assert!(is(&ctor, &ctor));
    }

    #[test]
    fn test_is_primitive_against_wrapper() {
        assert!(is(&Value::from("a"), &Builtin::String.into()));
        assert!(is(&Value::from(1), &Value::boxed(Primitive::Number(2.0))));
        assert!(!is(&Value::from(1), &Builtin::String.into()));
    }

    #[test]
    fn test_is_absent_values() {
        assert!(is(&Value::Null, &Value::Null));
        assert!(is(&Value::Undefined, &Value::Undefined));
        assert!(!is(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn test_instance_walks_the_chain() {
        let animal = Class::new("Animal").build();
        let dog = Class::new("Dog").extends(animal.clone()).build();
        let rex = dog.instantiate().build();
        assert!(instance(&rex, &dog.clone().into()));
        assert!(instance(&rex, &animal.clone().into()));
        assert!(instance(&rex, &Builtin::Object.into()));
        assert!(!instance(&animal.instantiate().build(), &dog.into()));
    }

    #[test]
    fn test_instance_rejects_primitives_and_non_constructors() {
        assert!(!instance(&Value::from("a"), &Builtin::String.into()));
        assert!(instance(
            &Value::boxed(Primitive::String("a".into())),
            &Builtin::String.into()
        ));
        assert!(!instance(&Value::array([1]), &Value::from("Array")));
        assert!(!instance(&Value::Null, &Builtin::Object.into()));
    }

    #[test]
    fn test_instance_through_prototype() {
        let dog = Class::new("Dog").build();
        let Value::Object(rex) = dog.instantiate().build() else {
            panic!("expected object");
        };
        // Object.create(rex)
        let child = Value::object().prototype(rex).build();
        assert!(instance(&child, &dog.clone().into()));
        assert_eq!(child.get("constructor").as_constructor(), Some(&dog));

        // Object.create(rex) with the constructor reset afterwards
        let Value::Object(rex) = dog.instantiate().build() else {
            panic!("expected object");
        };
        let detached = Value::object()
            .prototype(rex)
            .constructor(Builtin::Object)
            .build();
        assert!(instance_of(&detached, &dog));
        assert!(!instance(&detached, &Builtin::Array.into()));
    }
}
