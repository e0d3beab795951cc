// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ownprop_vm::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{
                create_data_property_or_throw, define_property_or_throw, delete_property_or_throw,
                set,
            },
            type_conversion::to_object,
        },
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary_object_create_with_intrinsics,
        },
        execution::{
            Agent, DefaultHostHooks, ExceptionType, HostHooks, JsResult, LegacyHost, Options,
            ProtoIntrinsics,
        },
        types::{Function, InternalSlots, PropertyDescriptor, PropertyKey, Symbol, Value},
    },
    Strategy, get_own_property_descriptor,
};

static LEGACY_HOSTS: [LegacyHost; 10] = LegacyHost::ALL;

/// One agent per host profile, plus a conformant host forced onto the
/// fallback.
fn agents() -> Vec<(&'static str, Agent)> {
    let mut agents = vec![
        (
            "default",
            Agent::new(Options::default(), &DefaultHostHooks),
        ),
        (
            "forced fallback",
            Agent::new(
                Options {
                    force_fallback: true,
                },
                &DefaultHostHooks,
            ),
        ),
    ];
    for host in LEGACY_HOSTS.iter() {
        let hooks: &'static dyn HostHooks = host;
        agents.push((host.name(), Agent::new(Options::default(), hooks)));
    }
    agents
}

fn data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> PropertyDescriptor {
    PropertyDescriptor {
        value: Some(value),
        writable: Some(writable),
        enumerable: Some(enumerable),
        configurable: Some(configurable),
        ..Default::default()
    }
}

fn getter(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Number(7.0))
}

#[test]
fn plain_object_data_property() {
    for (name, mut agent) in agents() {
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "answer");
        create_data_property_or_throw(&mut agent, obj.into(), key, Value::Number(42.0)).unwrap();
        let answer = Value::from_str(&mut agent, "answer");
        let desc = get_own_property_descriptor(&mut agent, obj.into(), answer).unwrap();
        assert_eq!(
            desc,
            Some(data(Value::Number(42.0), true, true, true)),
            "{name}"
        );
    }
}

#[test]
fn inherited_properties_are_absent() {
    for (name, mut agent) in agents() {
        let parent =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "name");
        let x = Value::from_str(&mut agent, "x");
        create_data_property_or_throw(&mut agent, parent.into(), key, x).unwrap();
        let child = ordinary_object_create_with_intrinsics(&mut agent, None);
        child.internal_set_prototype(&mut agent, Some(parent.into()));

        let name_value = Value::from_str(&mut agent, "name");
        let desc = get_own_property_descriptor(&mut agent, child.into(), name_value).unwrap();
        assert_eq!(desc, None, "{name}");
        let missing = Value::from_str(&mut agent, "missing");
        let desc = get_own_property_descriptor(&mut agent, parent.into(), missing).unwrap();
        assert_eq!(desc, None, "{name}");
    }
}

#[test]
fn nullish_targets_throw_type_error() {
    for (name, mut agent) in agents() {
        let any = Value::from_str(&mut agent, "any");
        for target in [Value::Undefined, Value::Null] {
            let error = get_own_property_descriptor(&mut agent, target, any).unwrap_err();
            assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError), "{name}");
        }
    }
}

#[test]
fn unconvertible_keys_throw_type_error() {
    for (name, mut agent) in agents() {
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        // No prototype, so neither toString nor valueOf.
        let key = ordinary_object_create_with_intrinsics(&mut agent, None);
        let error = get_own_property_descriptor(&mut agent, obj.into(), key.into()).unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError), "{name}");
    }
}

#[test]
fn string_primitives_expose_their_characters() {
    for (name, mut agent) in agents() {
        let foo = Value::from_str(&mut agent, "foo");
        let f = Value::from_str(&mut agent, "f");
        let desc = get_own_property_descriptor(&mut agent, foo, Value::Number(0.0)).unwrap();
        assert_eq!(desc, Some(data(f, false, true, false)), "{name}");
        let desc = get_own_property_descriptor(&mut agent, foo, Value::Number(3.0)).unwrap();
        assert_eq!(desc, None, "{name}");
        // String keys name the same property.
        let zero = Value::from_str(&mut agent, "0");
        let desc = get_own_property_descriptor(&mut agent, foo, zero).unwrap();
        assert_eq!(desc, Some(data(f, false, true, false)), "{name}");
    }
}

#[test]
fn assigned_indices_past_the_end_are_ordinary() {
    for (name, mut agent) in agents() {
        let foo = Value::from_str(&mut agent, "foo");
        let boxed = to_object(&mut agent, foo).unwrap();
        set(
            &mut agent,
            boxed,
            PropertyKey::from(4),
            Value::Number(1.0),
            true,
        )
        .unwrap();
        let desc =
            get_own_property_descriptor(&mut agent, boxed.into(), Value::Number(4.0)).unwrap();
        assert_eq!(
            desc,
            Some(data(Value::Number(1.0), true, true, true)),
            "{name}"
        );
        let f = Value::from_str(&mut agent, "f");
        let desc =
            get_own_property_descriptor(&mut agent, boxed.into(), Value::Number(0.0)).unwrap();
        assert_eq!(desc, Some(data(f, false, true, false)), "{name}");
    }
}

#[test]
fn repeated_calls_are_idempotent() {
    for (name, mut agent) in agents() {
        let parent =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let obj = ordinary_object_create_with_intrinsics(&mut agent, None);
        obj.internal_set_prototype(&mut agent, Some(parent.into()));
        let key = PropertyKey::from_str(&mut agent, "k");
        create_data_property_or_throw(&mut agent, obj.into(), key, Value::Boolean(true)).unwrap();

        let k = Value::from_str(&mut agent, "k");
        let first = get_own_property_descriptor(&mut agent, obj.into(), k).unwrap();
        let second = get_own_property_descriptor(&mut agent, obj.into(), k).unwrap();
        assert!(first.is_some(), "{name}");
        assert_eq!(first, second, "{name}");
        assert_eq!(obj.internal_prototype(&agent), Some(parent.into()), "{name}");
        assert_eq!(obj.property_count(&agent), 1, "{name}");
    }
}

#[test]
fn descriptors_follow_the_live_object() {
    for (name, mut agent) in agents() {
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "x");
        let x = Value::from_str(&mut agent, "x");
        set(&mut agent, obj.into(), key, Value::Number(1.0), true).unwrap();
        let first = get_own_property_descriptor(&mut agent, obj.into(), x).unwrap();
        assert_eq!(first, Some(data(Value::Number(1.0), true, true, true)), "{name}");

        set(&mut agent, obj.into(), key, Value::Number(2.0), true).unwrap();
        let second = get_own_property_descriptor(&mut agent, obj.into(), x).unwrap();
        assert_eq!(second, Some(data(Value::Number(2.0), true, true, true)), "{name}");

        delete_property_or_throw(&mut agent, obj.into(), key).unwrap();
        let deleted = get_own_property_descriptor(&mut agent, obj.into(), x).unwrap();
        assert_eq!(deleted, None, "{name}");
    }
}

#[test]
fn getter_only_accessor() {
    for (name, mut agent) in agents() {
        if let Strategy::Fallback {
            legacy_accessor_hooks: false,
            ..
        } = agent.descriptor_resolver().strategy()
        {
            // Without lookup hooks accessors are indistinguishable from data.
            continue;
        }
        let function: Function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(getter),
            BuiltinFunctionArgs::new(0, "get"),
        )
        .into();
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "k");
        define_property_or_throw(
            &mut agent,
            obj,
            key,
            PropertyDescriptor {
                get: Some(Some(function)),
                enumerable: Some(true),
                configurable: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let k = Value::from_str(&mut agent, "k");
        let desc = get_own_property_descriptor(&mut agent, obj.into(), k)
            .unwrap()
            .unwrap();
        assert_eq!(desc.get, Some(Some(function)), "{name}");
        // The missing setter is an absent field under every strategy.
        assert_eq!(desc.set, None, "{name}");
        assert_eq!(desc.value, None, "{name}");
        assert_eq!(desc.writable, None, "{name}");
        assert_eq!(desc.enumerable, Some(true), "{name}");
        assert_eq!(desc.configurable, Some(true), "{name}");

        let reified =
            PropertyDescriptor::from_property_descriptor(Some(desc), &mut agent).unwrap();
        let set_key = Value::from_str(&mut agent, "set");
        let set_desc = get_own_property_descriptor(&mut agent, reified.into(), set_key).unwrap();
        assert_eq!(set_desc, None, "{name}");
        assert_eq!(reified.property_count(&agent), 3, "{name}");
    }
}

#[test]
fn symbol_keys_keep_their_identity() {
    for (name, mut agent) in agents() {
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let symbol = Symbol::new(&mut agent, Some("key"));
        let other = Symbol::new(&mut agent, Some("key"));
        let x = Value::from_str(&mut agent, "x");
        create_data_property_or_throw(&mut agent, obj.into(), PropertyKey::from(symbol), x)
            .unwrap();
        let expected = Some(data(x, true, true, true));

        let desc = get_own_property_descriptor(&mut agent, obj.into(), symbol.into()).unwrap();
        assert_eq!(desc, expected, "{name}");

        let boxed = to_object(&mut agent, symbol.into()).unwrap();
        let desc = get_own_property_descriptor(&mut agent, obj.into(), boxed.into()).unwrap();
        assert_eq!(desc, expected, "{name}");

        // Same description, different Symbol.
        let desc = get_own_property_descriptor(&mut agent, obj.into(), other.into()).unwrap();
        assert_eq!(desc, None, "{name}");
        // Nor is the Symbol confused with its string form.
        let string_form = Value::from_str(&mut agent, "Symbol(key)");
        let desc = get_own_property_descriptor(&mut agent, obj.into(), string_form).unwrap();
        assert_eq!(desc, None, "{name}");
    }
}

#[test]
fn symbol_targets_are_boxed() {
    for (name, mut agent) in agents() {
        let symbol = Symbol::new(&mut agent, Some("target"));
        let to_string = Value::from_str(&mut agent, "toString");
        let desc = get_own_property_descriptor(&mut agent, symbol.into(), to_string).unwrap();
        assert_eq!(desc, None, "{name}");
    }
}

#[test]
fn number_and_boolean_targets_are_boxed() {
    for (name, mut agent) in agents() {
        let name_key = Value::from_str(&mut agent, "name");
        let desc = get_own_property_descriptor(&mut agent, Value::Number(42.0), name_key).unwrap();
        assert_eq!(desc, None, "{name}");

        let value_of = Value::from_str(&mut agent, "valueOf");
        let desc =
            get_own_property_descriptor(&mut agent, Value::Boolean(true), value_of).unwrap();
        assert_eq!(desc, None, "{name}");
        let desc =
            get_own_property_descriptor(&mut agent, Value::Number(42.0), Value::Number(0.0))
                .unwrap();
        assert_eq!(desc, None, "{name}");
    }
}

#[test]
fn own_data_shadows_inherited_accessor() {
    for (name, mut agent) in agents() {
        let function: Function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(getter),
            BuiltinFunctionArgs::new(0, "get"),
        )
        .into();
        let parent =
            ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "k");
        define_property_or_throw(
            &mut agent,
            parent,
            key,
            PropertyDescriptor {
                get: Some(Some(function)),
                enumerable: Some(true),
                configurable: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        let child = ordinary_object_create_with_intrinsics(&mut agent, None);
        child.internal_set_prototype(&mut agent, Some(parent.into()));
        create_data_property_or_throw(&mut agent, child.into(), key, Value::Number(1.0)).unwrap();

        let k = Value::from_str(&mut agent, "k");
        let desc = get_own_property_descriptor(&mut agent, child.into(), k).unwrap();
        assert_eq!(
            desc,
            Some(data(Value::Number(1.0), true, true, true)),
            "{name}"
        );
        assert_eq!(child.internal_prototype(&agent), Some(parent.into()), "{name}");
    }
}

#[test]
fn reified_descriptors_are_plain_objects() {
    let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
    let foo = Value::from_str(&mut agent, "foo");
    let desc = get_own_property_descriptor(&mut agent, foo, Value::Number(1.0)).unwrap();
    let obj = PropertyDescriptor::from_property_descriptor(desc, &mut agent).unwrap();
    let value = Value::from_str(&mut agent, "value");
    let o = Value::from_str(&mut agent, "o");
    let value_desc = get_own_property_descriptor(&mut agent, obj.into(), value).unwrap();
    assert_eq!(value_desc, Some(data(o, true, true, true)));
    assert_eq!(obj.property_count(&agent), 4);
}
