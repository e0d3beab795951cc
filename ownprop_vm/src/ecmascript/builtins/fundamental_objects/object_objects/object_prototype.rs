// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{get, has_own_property},
            type_conversion::{to_object, to_property_key},
        },
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
        execution::{Agent, JsResult},
        types::{InternalMethods, Object, PropertyKey, Value},
    },
    heap::WellKnownSymbolIndexes,
};
#[cfg(feature = "annex-b")]
use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::define_property_or_throw, testing_and_comparison::is_callable,
    },
    execution::ExceptionType,
    types::{Function, PropertyDescriptor},
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeHasOwnProperty;
impl Builtin for ObjectPrototypeHasOwnProperty {
    const NAME: &'static str = "hasOwnProperty";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::has_own_property);
}

struct ObjectPrototypePropertyIsEnumerable;
impl Builtin for ObjectPrototypePropertyIsEnumerable {
    const NAME: &'static str = "propertyIsEnumerable";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::property_is_enumerable);
}

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

#[cfg(feature = "annex-b")]
struct ObjectPrototypeDefineGetter;
#[cfg(feature = "annex-b")]
impl Builtin for ObjectPrototypeDefineGetter {
    const NAME: &'static str = "__defineGetter__";

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::define_getter);
}

#[cfg(feature = "annex-b")]
struct ObjectPrototypeDefineSetter;
#[cfg(feature = "annex-b")]
impl Builtin for ObjectPrototypeDefineSetter {
    const NAME: &'static str = "__defineSetter__";

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::define_setter);
}

#[cfg(feature = "annex-b")]
struct ObjectPrototypeLookupGetter;
#[cfg(feature = "annex-b")]
impl Builtin for ObjectPrototypeLookupGetter {
    const NAME: &'static str = "__lookupGetter__";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::lookup_getter);
}

#[cfg(feature = "annex-b")]
struct ObjectPrototypeLookupSetter;
#[cfg(feature = "annex-b")]
impl Builtin for ObjectPrototypeLookupSetter {
    const NAME: &'static str = "__lookupSetter__";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::lookup_setter);
}

impl ObjectPrototype {
    /// ### [20.1.3.2 Object.prototype.hasOwnProperty ( V )](https://tc39.es/ecma262/#sec-object.prototype.hasownproperty)
    fn has_own_property(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 3. Return ? HasOwnProperty(O, P).
        has_own_property(agent, o, p).map(Value::Boolean)
    }

    /// ### [20.1.3.4 Object.prototype.propertyIsEnumerable ( V )](https://tc39.es/ecma262/#sec-object.prototype.propertyisenumerable)
    fn property_is_enumerable(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        property_is_enumerable(agent, o, p).map(Value::Boolean)
    }

    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => return Ok(Value::from_str(agent, "[object Undefined]")),
            // 2. If the this value is null, return "[object Null]".
            Value::Null => return Ok(Value::from_str(agent, "[object Null]")),
            _ => {}
        }
        // 3. Let O be ! ToObject(this value).
        let o = to_object(agent, this_value)?;
        let builtin_tag = builtin_tag(agent, o);
        // 15. Let tag be ? Get(O, %Symbol.toStringTag%).
        let tag = get(
            agent,
            o,
            WellKnownSymbolIndexes::ToStringTag.to_property_key(),
        )?;
        // 16. If tag is not a String, set tag to builtinTag.
        let tag = match tag {
            Value::String(tag) => tag.to_string_lossy(agent),
            _ => builtin_tag.to_owned(),
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(Value::from_string(agent, format!("[object {tag}]")))
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        to_object(agent, this_value).map(Value::Object)
    }

    /// ### [B.2.2.2 Object.prototype.\_\_defineGetter\_\_ ( P, getter )](https://tc39.es/ecma262/#sec-object.prototype.__defineGetter__)
    #[cfg(feature = "annex-b")]
    fn define_getter(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 2. If IsCallable(getter) is false, throw a TypeError exception.
        let Some(getter) = is_callable(arguments.get(1)) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "getter is not callable"));
        };
        // 3. Let desc be PropertyDescriptor { [[Get]]: getter, [[Enumerable]]: true, [[Configurable]]: true }.
        let desc = PropertyDescriptor {
            get: Some(Some(getter)),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        };
        // 4. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, arguments.get(0))?;
        // 5. Perform ? DefinePropertyOrThrow(O, key, desc).
        define_property_or_throw(agent, o, key, desc)?;
        // 6. Return undefined.
        Ok(Value::Undefined)
    }

    /// ### [B.2.2.3 Object.prototype.\_\_defineSetter\_\_ ( P, setter )](https://tc39.es/ecma262/#sec-object.prototype.__defineSetter__)
    #[cfg(feature = "annex-b")]
    fn define_setter(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 2. If IsCallable(setter) is false, throw a TypeError exception.
        let Some(setter) = is_callable(arguments.get(1)) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "setter is not callable"));
        };
        // 3. Let desc be PropertyDescriptor { [[Set]]: setter, [[Enumerable]]: true, [[Configurable]]: true }.
        let desc = PropertyDescriptor {
            set: Some(Some(setter)),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        };
        // 4. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, arguments.get(0))?;
        // 5. Perform ? DefinePropertyOrThrow(O, key, desc).
        define_property_or_throw(agent, o, key, desc)?;
        // 6. Return undefined.
        Ok(Value::Undefined)
    }

    /// ### [B.2.2.4 Object.prototype.\_\_lookupGetter\_\_ ( P )](https://tc39.es/ecma262/#sec-object.prototype.__lookupGetter__)
    #[cfg(feature = "annex-b")]
    fn lookup_getter(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let getter = lookup_accessor(agent, this_value, arguments.get(0), |desc| desc.get)?;
        Ok(getter.map_or(Value::Undefined, |getter| getter.into()))
    }

    /// ### [B.2.2.5 Object.prototype.\_\_lookupSetter\_\_ ( P )](https://tc39.es/ecma262/#sec-object.prototype.__lookupSetter__)
    #[cfg(feature = "annex-b")]
    fn lookup_setter(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let setter = lookup_accessor(agent, this_value, arguments.get(0), |desc| desc.set)?;
        Ok(setter.map_or(Value::Undefined, |setter| setter.into()))
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().object_prototype();
        let builder = OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(8)
            .with_builtin_function_property::<ObjectPrototypeHasOwnProperty>()
            .with_builtin_function_property::<ObjectPrototypePropertyIsEnumerable>()
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>();
        #[cfg(feature = "annex-b")]
        let builder = if builder.agent.host_hooks().host_supports_legacy_accessors() {
            builder
                .with_builtin_function_property::<ObjectPrototypeDefineGetter>()
                .with_builtin_function_property::<ObjectPrototypeDefineSetter>()
                .with_builtin_function_property::<ObjectPrototypeLookupGetter>()
                .with_builtin_function_property::<ObjectPrototypeLookupSetter>()
        } else {
            builder
        };
        builder.build();
    }
}

/// Steps 4 through 17 of Object.prototype.toString: the tag used when the
/// object has no `@@toStringTag` of its own.
fn builtin_tag(agent: &Agent, o: Object) -> &'static str {
    match o {
        Object::BuiltinFunction(_) => "Function",
        Object::Error(_) => "Error",
        Object::PrimitiveObject(primitive) => match primitive.data(agent) {
            PrimitiveObjectData::Boolean(_) => "Boolean",
            PrimitiveObjectData::Number(_) => "Number",
            PrimitiveObjectData::String(_) => "String",
            PrimitiveObjectData::Symbol(_) => "Object",
        },
        Object::Object(_) | Object::EmbedderObject(_) => "Object",
    }
}

/// Steps 3 and 4 of Object.prototype.propertyIsEnumerable: whether `o` has an
/// own enumerable property `p`.
pub(crate) fn property_is_enumerable(
    agent: &mut Agent,
    o: Object,
    p: PropertyKey,
) -> JsResult<bool> {
    // 3. Let desc be ? O.[[GetOwnProperty]](P).
    let desc = o.internal_get_own_property(agent, p)?;
    // 4. If desc is undefined, return false.
    // 5. Return desc.[[Enumerable]].
    Ok(desc.is_some_and(|desc| desc.enumerable == Some(true)))
}

/// Shared loop of `__lookupGetter__` and `__lookupSetter__`. The lookup walks
/// the whole prototype chain and stops at the first object owning `p`.
#[cfg(feature = "annex-b")]
fn lookup_accessor(
    agent: &mut Agent,
    this_value: Value,
    p: Value,
    accessor: impl Fn(&PropertyDescriptor) -> Option<Option<Function>>,
) -> JsResult<Option<Function>> {
    // 1. Let O be ? ToObject(this value).
    let mut o = to_object(agent, this_value)?;
    // 2. Let key be ? ToPropertyKey(P).
    let key = to_property_key(agent, p)?;
    // 3. Repeat,
    loop {
        // a. Let desc be ? O.[[GetOwnProperty]](key).
        let desc = o.internal_get_own_property(agent, key)?;
        // b. If desc is not undefined, then
        if let Some(desc) = desc {
            // i. If IsAccessorDescriptor(desc) is true, return desc.[[Get]] / desc.[[Set]].
            if desc.is_accessor_descriptor() {
                return Ok(accessor(&desc).flatten());
            }
            // ii. Return undefined.
            return Ok(None);
        }
        // c. Set O to ? O.[[GetPrototypeOf]]().
        // d. If O is null, return undefined.
        match o.internal_get_prototype_of(agent)? {
            Some(parent) => o = parent,
            None => return Ok(None),
        }
    }
}
