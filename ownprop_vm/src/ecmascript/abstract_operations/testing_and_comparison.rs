// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::types::{Function, Value};

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call]] internal method.
///
/// Returns the function when the argument is callable.
pub fn is_callable(argument: Value) -> Option<Function> {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    Function::try_from(argument).ok()
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
pub fn same_value(x: impl Into<Value>, y: impl Into<Value>) -> bool {
    match (x.into(), y.into()) {
        // 2. If x is a Number, then
        //    a. Return Number::sameValue(x, y).
        (Value::Number(x), Value::Number(y)) => {
            (x.is_nan() && y.is_nan()) || (x == y && x.is_sign_negative() == y.is_sign_negative())
        }
        // 3. Return SameValueNonNumber(x, y).
        (x, y) => x == y,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_value_distinguishes_zeros_and_equates_nan() {
        assert!(same_value(f64::NAN, f64::NAN));
        assert!(!same_value(0.0, -0.0));
        assert!(same_value(1.0, 1.0));
        assert!(!same_value(Value::Undefined, Value::Null));
        assert!(same_value(true, true));
    }
}
