// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations.

use super::{
    operations_on_objects::{call_function, get, get_method},
    testing_and_comparison::is_callable,
};
use crate::{
    ecmascript::{
        builtins::{ArgumentsList, PrimitiveObject, PrimitiveObjectData},
        execution::{Agent, ExceptionType, JsResult},
        types::{
            MAX_INTEGER_INDEX, Object, PropertyKey, String, Value, is_integral_number,
            number_to_string,
        },
    },
    heap::WellKnownSymbolIndexes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
///
/// > NOTE: When ToPrimitive is called without a hint, then it generally
/// > behaves as if the hint were NUMBER. However, objects may over-ride this
/// > behaviour by defining a @@toPrimitive method. Symbol objects do so.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Value::Object(input) = input else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(
        agent,
        input.into(),
        WellKnownSymbolIndexes::ToPrimitive.to_property_key(),
    )?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        let hint = match preferred_type {
            // i. If preferredType is not present, then
            // 1. Let hint be "default".
            None => "default",
            // ii. Else if preferredType is STRING, then
            // 1. Let hint be "string".
            Some(PreferredType::String) => "string",
            // iii. Else,
            // 1. Assert: preferredType is NUMBER.
            // 2. Let hint be "number".
            Some(PreferredType::Number) => "number",
        };
        let hint = Value::from_str(agent, hint);
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(
            agent,
            exotic_to_prim,
            input.into(),
            Some(ArgumentsList(&[hint])),
        )?;
        if !result.is_object() {
            // v. If result is not an Object, return result.
            Ok(result)
        } else {
            // vi. Throw a TypeError exception.
            Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Cannot convert object to primitive value",
            ))
        }
    } else {
        // c. If preferredType is not present, let preferredType be NUMBER.
        // d. Return ? OrdinaryToPrimitive(input, preferredType).
        ordinary_to_primitive(
            agent,
            input,
            preferred_type.unwrap_or(PreferredType::Number),
        )
    }
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub(crate) fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        PreferredType::String => {
            // 1. If hint is STRING, then
            // a. Let methodNames be « "toString", "valueOf" ».
            [to_string_key, value_of_key]
        }
        PreferredType::Number => {
            // 2. Else,
            // a. Let methodNames be « "valueOf", "toString" ».
            [value_of_key, to_string_key]
        }
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if let Some(method) = is_callable(method) {
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, o.into(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(string) => Ok(string),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a string",
        )),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(String::from_str(agent, "undefined")),
        // 4. If argument is null, return "null".
        Value::Null => Ok(String::from_str(agent, "null")),
        // 5. If argument is true, return "true".
        // 6. If argument is false, return "false".
        Value::Boolean(value) => Ok(String::from_str(agent, if value { "true" } else { "false" })),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(value) => Ok(number_to_string(agent, value)),
        // 9. Assert: argument is an Object.
        Value::Object(_) => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Assert: primValue is not an Object.
            // 12. Return ? ToString(primValue).
            to_string(agent, prim_value)
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// The abstract operation ToObject takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an Object
/// or a throw completion. It converts argument to a value of type Object
/// according to [Table 13](https://tc39.es/ecma262/#table-toobject-conversions).
/// Every primitive is wrapped in a fresh object.
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    let data = match argument {
        Value::Undefined | Value::Null => {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            ));
        }
        // Return a new Boolean object whose [[BooleanData]] internal slot is set to argument.
        Value::Boolean(value) => PrimitiveObjectData::Boolean(value),
        // Return a new String object whose [[StringData]] internal slot is set to argument.
        Value::String(value) => PrimitiveObjectData::String(value),
        // Return a new Symbol object whose [[SymbolData]] internal slot is set to argument.
        Value::Symbol(value) => PrimitiveObjectData::Symbol(value),
        // Return a new Number object whose [[NumberData]] internal slot is set to argument.
        Value::Number(value) => PrimitiveObjectData::Number(value),
        Value::Object(object) => return Ok(object),
    };
    Ok(PrimitiveObject::create(agent, data).into())
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
///
/// The abstract operation ToPropertyKey takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a
/// property key or a throw completion. It converts argument to a value that
/// can be used as a property key.
pub fn to_property_key(agent: &mut Agent, argument: Value) -> JsResult<PropertyKey> {
    // Fast path: strings, symbols and integer indexes convert without
    // observable effects.
    match argument {
        Value::String(string) => return Ok(PropertyKey::from_string(agent, string)),
        Value::Symbol(symbol) => return Ok(PropertyKey::Symbol(symbol)),
        Value::Number(number)
            if is_integral_number(number)
                && (0.0..=MAX_INTEGER_INDEX as f64).contains(&number) =>
        {
            // ToString(-0) is "0".
            return Ok(PropertyKey::Integer(number as i64));
        }
        _ => {}
    }
    // 1. Let key be ? ToPrimitive(argument, STRING).
    let key = to_primitive(agent, argument, Some(PreferredType::String))?;
    // 2. If key is a Symbol, then
    if let Value::Symbol(symbol) = key {
        // a. Return key.
        return Ok(PropertyKey::Symbol(symbol));
    }
    // 3. Return ! ToString(key).
    let key = to_string(agent, key)?;
    Ok(PropertyKey::from_string(agent, key))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{DefaultHostHooks, Options, ProtoIntrinsics},
        types::Symbol,
    };

    #[test]
    fn to_object_rejects_nullish() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        for value in [Value::Undefined, Value::Null] {
            let error = to_object(&mut agent, value).unwrap_err();
            assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        }
    }

    #[test]
    fn to_object_wraps_primitives() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let foo = String::from_str(&mut agent, "foo");
        let Object::PrimitiveObject(wrapper) = to_object(&mut agent, foo.into()).unwrap() else {
            panic!("expected a String object");
        };
        assert_eq!(wrapper.string_data(&agent), Some(foo));
    }

    #[test]
    fn numbers_become_canonical_keys() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        assert_eq!(
            to_property_key(&mut agent, Value::Number(-0.0)).unwrap(),
            PropertyKey::Integer(0)
        );
        assert_eq!(
            to_property_key(&mut agent, Value::Number(4.0)).unwrap(),
            PropertyKey::Integer(4)
        );
        let key = to_property_key(&mut agent, Value::Number(1.5)).unwrap();
        assert!(key.is_str(&agent, "1.5"));
        let key = to_property_key(&mut agent, Value::Number(-1.0)).unwrap();
        assert!(key.is_str(&agent, "-1"));
    }

    #[test]
    fn boxed_symbols_unwrap_to_their_symbol() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let symbol = Symbol::new(&mut agent, Some("key"));
        let boxed = to_object(&mut agent, symbol.into()).unwrap();
        assert_eq!(
            to_property_key(&mut agent, boxed.into()).unwrap(),
            PropertyKey::Symbol(symbol)
        );
        let error = to_string(&mut agent, boxed.into()).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn objects_without_conversion_methods_throw() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let bare = ordinary_object_create_with_intrinsics(&mut agent, None);
        let error = to_property_key(&mut agent, bare.into()).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn plain_objects_stringify_through_to_string() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = to_property_key(&mut agent, obj.into()).unwrap();
        assert!(key.is_str(&agent, "[object Object]"));
    }
}
