// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::{testing_and_comparison::is_callable, type_conversion::to_object};
use crate::ecmascript::{
    builtins::{ArgumentsList, Behaviour},
    execution::{Agent, ExceptionType, JsResult},
    types::{Function, InternalMethods, Object, PropertyDescriptor, PropertyKey, Value},
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub fn get(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<Value> {
    // 1. Return ? O.[[Get]](P, O).
    o.internal_get(agent, p, o.into())
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// If the value is not an object, the property lookup is performed using a
/// wrapper object appropriate for the type of the value.
pub fn get_v(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Value> {
    // 1. Let O be ? ToObject(V).
    let o = to_object(agent, v)?;
    // 2. Return ? O.[[Get]](P, V).
    o.internal_get(agent, p, v)
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
///
/// The abstract operation Set takes arguments O (an Object), P (a property
/// key), V (an ECMAScript language value), and Throw (a Boolean) and returns
/// either a normal completion containing UNUSED or a throw completion. It is
/// used to set the value of a specific property of an object. V is the new
/// value for the property.
pub fn set(agent: &mut Agent, o: Object, p: PropertyKey, v: Value, throw: bool) -> JsResult<()> {
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = o.internal_set(agent, p, v, o.into())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        let message = format!(
            "Cannot assign to read only property '{}'",
            p.to_display_string(agent)
        );
        return Err(agent.throw_exception_with_message(ExceptionType::TypeError, message));
    }
    // 3. Return UNUSED.
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// > NOTE: This abstract operation creates a property whose attributes are set
/// > to the same defaults used for properties created by the ECMAScript language
/// > assignment operator. Normally, the property will not already exist. If it
/// > does exist and is not configurable or if O is not extensible,
/// > \[\[DefineOwnProperty]] will return false.
pub fn create_data_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor::new_data_descriptor(value);
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, property_key, new_desc)
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    let success = create_data_property(agent, object, property_key, value)?;
    if !success {
        Err(agent.throw_exception(ExceptionType::TypeError, "Could not create property"))
    } else {
        Ok(())
    }
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
///
/// Calls the \[\[DefineOwnProperty]] internal method of an object in a
/// manner that will throw a TypeError exception if the requested property
/// update cannot be performed.
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
    desc: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = object.internal_define_own_property(agent, property_key, desc)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        let message = format!(
            "Cannot redefine property: {}",
            property_key.to_display_string(agent)
        );
        Err(agent.throw_exception_with_message(ExceptionType::TypeError, message))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.9 DeletePropertyOrThrow ( O, P )](https://tc39.es/ecma262/#sec-deletepropertyorthrow)
pub fn delete_property_or_throw(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<()> {
    // 1. Let success be ? O.[[Delete]](P).
    let success = o.internal_delete(agent, p)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception(ExceptionType::TypeError, "Failed to delete property"))
    } else {
        // 3. Return unused.
        Ok(())
    }
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion.
pub fn get_method(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 2. If func is either undefined or null, return undefined.
    if func.is_nullish() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    let Some(func) = is_callable(func) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
    };
    // 4. Return func.
    Ok(Some(func))
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
pub fn has_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Return ? O.[[HasProperty]](P).
    o.internal_has_property(agent, p)
}

/// ### [7.3.13 HasOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-hasownproperty)
///
/// The abstract operation HasOwnProperty takes arguments O (an Object) and P
/// (a property key) and returns either a normal completion containing a
/// Boolean or a throw completion. It is used to determine whether an object
/// has an own property with the specified property key.
pub fn has_own_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let desc = o.internal_get_own_property(agent, p)?;
    // 2. If desc is undefined, return false.
    // 3. Return true.
    Ok(desc.is_some())
}

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// F is the function object, V is an ECMAScript language value that is the
/// this value of the \[\[Call]], and argumentsList is the value passed to the
/// corresponding argument of the internal method. If argumentsList is not
/// present, a new empty List is used as its value.
pub fn call(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    let Some(f) = is_callable(f) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(agent, f, v, arguments_list)
}

/// Abstract operation Call specialized for a Function.
pub fn call_function(
    agent: &mut Agent,
    f: Function,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    match f {
        Function::BuiltinFunction(f) => {
            let Behaviour::Regular(behaviour) = agent[f].behaviour;
            behaviour(agent, v, arguments_list)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{DefaultHostHooks, Options, ProtoIntrinsics},
    };

    #[test]
    fn set_then_get() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "name");
        set(&mut agent, obj.into(), key, Value::Number(3.0), true).unwrap();
        assert_eq!(get(&mut agent, obj.into(), key).unwrap(), Value::Number(3.0));
        assert!(has_own_property(&mut agent, obj.into(), key).unwrap());
    }

    #[test]
    fn inherited_properties_are_not_own() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let parent =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "name");
        create_data_property_or_throw(&mut agent, parent.into(), key, Value::Boolean(true))
            .unwrap();
        let child = ordinary_object_create_with_intrinsics(&mut agent, None);
        child
            .internal_set_prototype_of(&mut agent, Some(parent.into()))
            .unwrap();
        assert!(has_property(&mut agent, child.into(), key).unwrap());
        assert!(!has_own_property(&mut agent, child.into(), key).unwrap());
        assert_eq!(get(&mut agent, child.into(), key).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn define_on_non_extensible_throws() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        obj.internal_prevent_extensions(&mut agent).unwrap();
        let key = PropertyKey::from_str(&mut agent, "x");
        let error = define_property_or_throw(
            &mut agent,
            obj,
            key,
            PropertyDescriptor::new_data_descriptor(1),
        )
        .unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn calling_a_non_callable_throws() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error = call(&mut agent, Value::Number(1.0), Value::Undefined, None).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    }
}
