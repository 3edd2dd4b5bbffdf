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

//! is() and instance()

use crate::check;
use crate::model::Value;
use crate::registry::function::{FunctionResult, PredicateFunction};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ParameterKind};
use std::sync::LazyLock;

/// is() - same type category
pub struct IsFunction;

impl PredicateFunction for IsFunction {
    fn name(&self) -> &str {
        "is"
    }
    fn human_friendly_name(&self) -> &str {
        "Is"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "is",
                vec![
                    ParameterInfo::required("a", ParameterKind::Any),
                    ParameterInfo::required("b", ParameterKind::Any),
                ],
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns `true` if both operands are of the same type. A constructor stands for the instances it builds, so a date is a `Date`."
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<bool> {
        self.validate_args(args)?;
        Ok(check::is(&args[0], &args[1]))
    }
}

/// instance() - host `instanceof`
pub struct InstanceFunction;

impl PredicateFunction for InstanceFunction {
    fn name(&self) -> &str {
        "instance"
    }
    fn human_friendly_name(&self) -> &str {
        "Instance"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "instance",
                vec![
                    ParameterInfo::required("value", ParameterKind::Any),
                    ParameterInfo::required("constructor", ParameterKind::Constructor),
                ],
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns `true` if the constructor appears in the value's constructor chain. Primitives are never instances."
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<bool> {
        self.validate_args(args)?;
        Ok(check::instance(&args[0], &args[1]))
    }
}
