// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, Value};
use crate::ecmascript::builtins::BuiltinFunction;

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// An object that supports the \[\[Call\]\] internal method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    BuiltinFunction(BuiltinFunction),
}

impl From<BuiltinFunction> for Function {
    fn from(value: BuiltinFunction) -> Self {
        Function::BuiltinFunction(value)
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(data) => Object::BuiltinFunction(data),
        }
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Object(value.into())
    }
}

impl TryFrom<Object> for Function {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::BuiltinFunction(data) => Ok(Function::BuiltinFunction(data)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for Function {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Function::try_from(object),
            _ => Err(()),
        }
    }
}
