// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hosts whose `Object.getOwnPropertyDescriptor` is missing or only partly
//! conformant, modelled on engines that shipped such primitives.

use super::{Agent, ExceptionType, HostHooks, JsResult, NativeGetOwnPropertyDescriptor};
use crate::ecmascript::{
    abstract_operations::type_conversion::{to_object, to_property_key, to_string},
    builtins::{EmbedderObject, fundamental_objects::object_objects::ObjectConstructor},
    types::{InternalMethods, Object, PropertyDescriptor, PropertyKey, Value},
};

/// A catalogue of host environments, each with a characteristic defect in
/// its native descriptor primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyHost {
    /// Conformant primitive, with a document.
    Evergreen,
    /// No primitive and no Symbols; legacy accessor hooks are present.
    Es3,
    /// No primitive, no Symbols and no legacy accessor hooks.
    Es3WithoutAccessors,
    /// Throws on primitive targets and converts keys with ToString; has no
    /// Symbols.
    Es5,
    /// Throws on primitive targets only.
    PrimitiveTargetsRejected,
    /// Converts every key that is not a primitive Symbol with ToString, so
    /// boxed Symbol keys throw.
    SymbolKeysStringified,
    /// Only accepts DOM elements.
    DomOnly,
    /// Throws on DOM elements.
    DomBroken,
    /// Never reports the index properties of String objects.
    StringIndexBroken,
    /// Throws on plain objects.
    OrdinaryObjectsRejected,
}

impl LegacyHost {
    pub const ALL: [LegacyHost; 10] = [
        LegacyHost::Evergreen,
        LegacyHost::Es3,
        LegacyHost::Es3WithoutAccessors,
        LegacyHost::Es5,
        LegacyHost::PrimitiveTargetsRejected,
        LegacyHost::SymbolKeysStringified,
        LegacyHost::DomOnly,
        LegacyHost::DomBroken,
        LegacyHost::StringIndexBroken,
        LegacyHost::OrdinaryObjectsRejected,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LegacyHost::Evergreen => "evergreen",
            LegacyHost::Es3 => "es3",
            LegacyHost::Es3WithoutAccessors => "es3-without-accessors",
            LegacyHost::Es5 => "es5",
            LegacyHost::PrimitiveTargetsRejected => "primitive-targets-rejected",
            LegacyHost::SymbolKeysStringified => "symbol-keys-stringified",
            LegacyHost::DomOnly => "dom-only",
            LegacyHost::DomBroken => "dom-broken",
            LegacyHost::StringIndexBroken => "string-index-broken",
            LegacyHost::OrdinaryObjectsRejected => "ordinary-objects-rejected",
        }
    }
}

impl HostHooks for LegacyHost {
    fn host_get_own_property_descriptor(&self) -> Option<NativeGetOwnPropertyDescriptor> {
        let native: NativeGetOwnPropertyDescriptor = match self {
            LegacyHost::Evergreen => ObjectConstructor::get_own_property_descriptor,
            LegacyHost::Es3 | LegacyHost::Es3WithoutAccessors => return None,
            LegacyHost::Es5 => es5_get_own_property_descriptor,
            LegacyHost::PrimitiveTargetsRejected => object_target_get_own_property_descriptor,
            LegacyHost::SymbolKeysStringified => string_key_get_own_property_descriptor,
            LegacyHost::DomOnly => dom_only_get_own_property_descriptor,
            LegacyHost::DomBroken => dom_broken_get_own_property_descriptor,
            LegacyHost::StringIndexBroken => no_string_index_get_own_property_descriptor,
            LegacyHost::OrdinaryObjectsRejected => exotic_only_get_own_property_descriptor,
        };
        Some(native)
    }

    fn host_create_element(&self, agent: &mut Agent) -> Option<Object> {
        Some(EmbedderObject::create_element(agent, "div").into())
    }

    fn host_supports_symbols(&self) -> bool {
        !matches!(
            self,
            LegacyHost::Es3 | LegacyHost::Es3WithoutAccessors | LegacyHost::Es5
        )
    }

    fn host_supports_legacy_accessors(&self) -> bool {
        cfg!(feature = "annex-b") && !matches!(self, LegacyHost::Es3WithoutAccessors)
    }
}

fn reject_target(agent: &mut Agent) -> JsResult<Option<PropertyDescriptor>> {
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Object.getOwnPropertyDescriptor called on unsupported object",
    ))
}

fn key_from_string(agent: &mut Agent, property: Value) -> JsResult<PropertyKey> {
    if let Value::Symbol(symbol) = property {
        return Ok(PropertyKey::Symbol(symbol));
    }
    let key = to_string(agent, property)?;
    Ok(PropertyKey::from_string(agent, key))
}

fn es5_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    let Value::Object(obj) = o else {
        return reject_target(agent);
    };
    let key = key_from_string(agent, p)?;
    obj.internal_get_own_property(agent, key)
}

fn object_target_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    let Value::Object(obj) = o else {
        return reject_target(agent);
    };
    let key = to_property_key(agent, p)?;
    obj.internal_get_own_property(agent, key)
}

fn string_key_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    let obj = to_object(agent, o)?;
    let key = key_from_string(agent, p)?;
    obj.internal_get_own_property(agent, key)
}

fn dom_only_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    if !matches!(o, Value::Object(Object::EmbedderObject(_))) {
        return reject_target(agent);
    }
    ObjectConstructor::get_own_property_descriptor(agent, o, p)
}

fn dom_broken_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    if matches!(o, Value::Object(Object::EmbedderObject(_))) {
        return reject_target(agent);
    }
    ObjectConstructor::get_own_property_descriptor(agent, o, p)
}

fn no_string_index_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    let obj = to_object(agent, o)?;
    let key = to_property_key(agent, p)?;
    if let Object::PrimitiveObject(primitive) = obj {
        if let Some(string) = primitive.string_data(agent) {
            if key.as_index(string.utf16_len(agent)).is_some() {
                return Ok(None);
            }
        }
    }
    obj.internal_get_own_property(agent, key)
}

fn exotic_only_get_own_property_descriptor(
    agent: &mut Agent,
    o: Value,
    p: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    if matches!(o, Value::Object(Object::Object(_))) {
        return reject_target(agent);
    }
    ObjectConstructor::get_own_property_descriptor(agent, o, p)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{Options, ProtoIntrinsics},
        types::Symbol,
    };

    #[test]
    fn es5_rejects_primitives_and_boxed_symbols() {
        let mut agent = Agent::new(Options::default(), &LegacyHost::Es5);
        let native = LegacyHost::Es5.host_get_own_property_descriptor().unwrap();
        let name = Value::from_str(&mut agent, "name");
        let error = native(&mut agent, Value::Number(42.0), name).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let symbol = Symbol::new(&mut agent, None);
        let boxed = to_object(&mut agent, symbol.into()).unwrap();
        let error = native(&mut agent, obj.into(), boxed.into()).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        // Primitive Symbols are passed through.
        assert!(native(&mut agent, obj.into(), symbol.into()).unwrap().is_none());
    }

    #[test]
    fn dom_only_and_dom_broken_are_opposites() {
        let mut agent = Agent::new(Options::default(), &LegacyHost::DomOnly);
        let element = LegacyHost::DomOnly.host_create_element(&mut agent).unwrap();
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = Value::from_str(&mut agent, "id");

        let dom_only = LegacyHost::DomOnly.host_get_own_property_descriptor().unwrap();
        assert!(dom_only(&mut agent, element.into(), key).is_ok());
        assert!(dom_only(&mut agent, obj.into(), key).is_err());

        let dom_broken = LegacyHost::DomBroken.host_get_own_property_descriptor().unwrap();
        assert!(dom_broken(&mut agent, element.into(), key).is_err());
        assert!(dom_broken(&mut agent, obj.into(), key).is_ok());
    }

    #[test]
    fn es3_hosts_have_no_primitive() {
        assert!(LegacyHost::Es3.host_get_own_property_descriptor().is_none());
        assert!(
            LegacyHost::Es3WithoutAccessors
                .host_get_own_property_descriptor()
                .is_none()
        );
        assert!(!LegacyHost::Es3WithoutAccessors.host_supports_legacy_accessors());
    }
}
