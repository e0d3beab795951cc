// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use super::omit_missing_accessor_halves;
use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{call_function, get, has_own_property},
        testing_and_comparison::is_callable,
        type_conversion::{to_object, to_property_key},
    },
    builtins::{ArgumentsList, fundamental_objects::object_objects::property_is_enumerable},
    execution::{Agent, JsResult, NativeGetOwnPropertyDescriptor},
    types::{
        Function, InternalMethods, InternalSlots, Object, PropertyDescriptor, PropertyKey, String,
        Value,
    },
};

/// `__lookupGetter__` and `__lookupSetter__` of `Object.prototype`, captured
/// when the agent is probed.
#[derive(Debug, Clone, Copy)]
pub(super) struct LegacyAccessorHooks {
    lookup_getter: Function,
    lookup_setter: Function,
}

impl LegacyAccessorHooks {
    /// The hooks exist if `Object.prototype` owns `__defineGetter__`.
    pub(super) fn detect(agent: &mut Agent) -> Option<Self> {
        let object_prototype: Object = agent.current_realm().intrinsics().object_prototype().into();
        let define_getter = PropertyKey::from_str(agent, "__defineGetter__");
        if !has_own_property(agent, object_prototype, define_getter).ok()? {
            return None;
        }
        let mut lookup = |name: &str| -> Option<Function> {
            let key = PropertyKey::from_str(agent, name);
            is_callable(get(agent, object_prototype, key).ok()?)
        };
        let lookup_getter = lookup("__lookupGetter__")?;
        let lookup_setter = lookup("__lookupSetter__")?;
        Some(Self {
            lookup_getter,
            lookup_setter,
        })
    }

    fn lookup(
        agent: &mut Agent,
        hook: Function,
        object: Object,
        key: Value,
    ) -> JsResult<Option<Function>> {
        let result = call_function(agent, hook, object.into(), Some(ArgumentsList(&[key])))?;
        Ok(is_callable(result))
    }
}

/// Descriptor retrieval from observable object behaviour, for hosts whose
/// native primitive is missing or demoted.
#[derive(Debug, Clone, Copy)]
pub(super) struct Fallback {
    /// Tried first; its errors are ignored.
    pub(super) fallback1: Option<NativeGetOwnPropertyDescriptor>,
    /// Tried for keys that are not String indices; its errors are ignored.
    pub(super) fallback2: Option<NativeGetOwnPropertyDescriptor>,
    pub(super) legacy_accessor_hooks: Option<LegacyAccessorHooks>,
}

impl Fallback {
    pub(super) fn get_own_property_descriptor(
        &self,
        agent: &mut Agent,
        object: Value,
        property: Value,
    ) -> JsResult<Option<PropertyDescriptor>> {
        let obj = to_object(agent, object)?;
        let key = to_property_key(agent, property)?;

        if let Some(fallback1) = self.fallback1 {
            let key = key.convert_to_value(agent);
            match fallback1(agent, obj.into(), key) {
                Ok(desc) => return Ok(desc.map(omit_missing_accessor_halves)),
                Err(error) => trace!(?error, "fallback1 threw"),
            }
        }

        let string_index = string_index(agent, obj, key);

        if let Some(fallback2) = self.fallback2.filter(|_| string_index.is_none()) {
            let key = key.convert_to_value(agent);
            match fallback2(agent, obj.into(), key) {
                Ok(desc) => return Ok(desc.map(omit_missing_accessor_halves)),
                Err(error) => trace!(?error, "fallback2 threw"),
            }
        }

        if string_index.is_none() && !has_own_property(agent, obj, key)? {
            return Ok(None);
        }

        let configurable = !object.is_primitive() && string_index.is_none();
        let enumerable = property_is_enumerable(agent, obj, key)?;

        if let Some(hooks) = self.legacy_accessor_hooks {
            let object_prototype: Object =
                agent.current_realm().intrinsics().object_prototype().into();
            let key_value = key.convert_to_value(agent);
            let (getter, setter) = if obj == object_prototype {
                (
                    LegacyAccessorHooks::lookup(agent, hooks.lookup_getter, obj, key_value)?,
                    LegacyAccessorHooks::lookup(agent, hooks.lookup_setter, obj, key_value)?,
                )
            } else {
                with_prototype(agent, obj, Some(object_prototype), |agent| {
                    Ok((
                        LegacyAccessorHooks::lookup(agent, hooks.lookup_getter, obj, key_value)?,
                        LegacyAccessorHooks::lookup(agent, hooks.lookup_setter, obj, key_value)?,
                    ))
                })?
            };
            if getter.is_some() || setter.is_some() {
                return Ok(Some(PropertyDescriptor {
                    get: getter.map(Some),
                    set: setter.map(Some),
                    enumerable: Some(enumerable),
                    configurable: Some(configurable),
                    ..Default::default()
                }));
            }
        }

        let (value, writable) = match string_index {
            Some((string, index)) => (string.char_at(agent, index).into(), false),
            None => (get(agent, obj, key)?, true),
        };
        Ok(Some(PropertyDescriptor {
            value: Some(value),
            writable: Some(writable),
            enumerable: Some(enumerable),
            configurable: Some(configurable),
            ..Default::default()
        }))
    }
}

/// The String data and index if `key` is an index within a String object.
fn string_index(agent: &Agent, obj: Object, key: PropertyKey) -> Option<(String, usize)> {
    let Object::PrimitiveObject(primitive) = obj else {
        return None;
    };
    let string = primitive.string_data(agent)?;
    let index = key.as_index(string.utf16_len(agent))?;
    Some((string, index))
}

/// Runs `f` while `object` inherits directly from `prototype`, then restores
/// the original prototype whether or not `f` succeeded. If the object
/// refuses the new prototype `f` runs against the original chain.
fn with_prototype<T>(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
    f: impl FnOnce(&mut Agent) -> JsResult<T>,
) -> JsResult<T> {
    let original = object.internal_get_prototype_of(agent)?;
    let swapped = original != prototype && object.internal_set_prototype_of(agent, prototype)?;
    let result = f(agent);
    if swapped {
        object.internal_set_prototype(agent, original);
    }
    result
}
