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

//! exists() and empty()

use crate::check;

unary_predicate! {
    /// exists() - false only for `undefined` and `null`
    ExistsFunction {
        name: "exists",
        friendly: "Exists",
        doc: "Returns `true` unless the value is `undefined` or `null`. Falsy values such as `0`, `\"\"`, `false` and `NaN` exist.",
        check: check::exists,
    }
}

unary_predicate! {
    /// empty() - falsy, zero length, no own properties, or zero size
    EmptyFunction {
        name: "empty",
        friendly: "Empty",
        doc: "Returns `true` for falsy values, values whose numeric `length` is 0, objects without own enumerable properties, and maps or sets of size 0.",
        check: check::empty,
    }
}
