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

//! Type tag resolution
//!
//! The single place where values are classified. Predicates compare the
//! tags produced here and never inspect layouts themselves.

use super::constructor::Constructor;
use super::object::{FunctionKind, ObjectKind};
use super::types::TypeTag;
use super::value::Value;

/// Resolve the type tag of a value
///
/// Boxed primitives share the tag of the primitive they wrap. Objects are
/// classified by layout, most specific first, before falling back to
/// [`TypeTag::Object`].
pub fn get_type(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Object(object) => match object.kind() {
            ObjectKind::Boxed(primitive) => primitive.tag(),
            ObjectKind::Array(_) => TypeTag::Array,
            ObjectKind::Function(function) => match function.kind() {
                FunctionKind::Generator => TypeTag::GeneratorFunction,
                FunctionKind::Arrow | FunctionKind::Constructor(_) => TypeTag::Function,
            },
            ObjectKind::Date(_) => TypeTag::Date,
            ObjectKind::RegExp(_) => TypeTag::RegExp,
            ObjectKind::Error(_) => TypeTag::Error,
            ObjectKind::Map(_) => TypeTag::Map,
            ObjectKind::Set(_) => TypeTag::Set,
            ObjectKind::Generator => TypeTag::Generator,
            ObjectKind::Plain | ObjectKind::WeakMap | ObjectKind::WeakSet => TypeTag::Object,
        },
    }
}

/// The type identity a value stands for when compared with [`crate::is`]
///
/// A constructor reference stands for the instances it builds; any other
/// value, non-constructible functions included, stands for itself.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceShape {
    /// Tag of the represented instances
    pub tag: TypeTag,
    /// Constructor of the represented instances, absent for `Undefined` and `Null`
    pub constructor: Option<Constructor>,
}

impl InstanceShape {
    /// Normalize a value or constructor reference
    pub fn of(value: &Value) -> Self {
        match value.as_constructor() {
            Some(constructor) => Self {
                tag: constructor.instance_tag(),
                constructor: Some(constructor.clone()),
            },
            None => Self {
                tag: get_type(value),
                constructor: value.constructor(),
            },
        }
    }

    /// Same constructor identity, or failing that the same tag
    pub fn same_type_as(&self, other: &InstanceShape) -> bool {
        if let (Some(a), Some(b)) = (&self.constructor, &other.constructor) {
            if a == b {
                return true;
            }
        }
        self.tag == other.tag
    }
}
