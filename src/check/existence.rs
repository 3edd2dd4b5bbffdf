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

//! Existence and emptiness

use crate::model::{TypeTag, Value, get_type};

/// Returns `true` unless the value is `Undefined` or `Null`
///
/// Falsy values such as `0`, `""`, `false` and `NaN` exist.
pub fn exists(value: &Value) -> bool {
    !value.is_absent()
}

/// Returns `true` if the value is considered empty
///
/// First match wins:
/// 1. falsy values are empty;
/// 2. a numeric `length` of 0 is empty, whatever else the value holds;
/// 3. objects without own enumerable properties and maps or sets of size 0
///    are empty;
/// 4. anything else is not.
pub fn empty(value: &Value) -> bool {
    if !value.is_truthy() {
        return true;
    }
    if value.length() == Some(0.0) {
        return true;
    }
    let Some(object) = value.as_object() else {
        return false;
    };
    match get_type(value) {
        TypeTag::Object => object.own_enumerable_keys().next().is_none(),
        TypeTag::Map | TypeTag::Set => object.size() == Some(0),
        _ => false,
    }
}
