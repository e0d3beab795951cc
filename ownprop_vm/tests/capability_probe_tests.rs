// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ownprop_vm::{
    Strategy,
    ecmascript::{
        abstract_operations::operations_on_objects::define_property_or_throw,
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary_object_create_with_intrinsics,
        },
        execution::{Agent, DefaultHostHooks, JsResult, LegacyHost, Options, ProtoIntrinsics},
        types::{PropertyDescriptor, PropertyKey, Value},
    },
    get_own_property_descriptor,
};

const HOOKS: bool = cfg!(feature = "annex-b");

fn strategy_of(host: &'static LegacyHost) -> Strategy {
    Agent::new(Options::default(), host)
        .descriptor_resolver()
        .strategy()
}

fn fallback(fallback1: bool, fallback2: bool) -> Strategy {
    Strategy::Fallback {
        fallback1,
        fallback2,
        legacy_accessor_hooks: HOOKS,
    }
}

fn wrapped(coerce_object: bool, coerce_key: bool) -> Strategy {
    Strategy::NativeWrapped {
        coerce_object,
        coerce_key,
    }
}

#[test]
fn conformant_hosts_use_the_native_primitive() {
    let agent = Agent::new(Options::default(), &DefaultHostHooks);
    assert_eq!(agent.descriptor_resolver().strategy(), Strategy::Native);
    assert_eq!(strategy_of(&LegacyHost::Evergreen), Strategy::Native);
}

#[test]
fn hosts_without_a_primitive_fall_back() {
    assert_eq!(strategy_of(&LegacyHost::Es3), fallback(false, false));
    assert_eq!(
        strategy_of(&LegacyHost::Es3WithoutAccessors),
        Strategy::Fallback {
            fallback1: false,
            fallback2: false,
            legacy_accessor_hooks: false,
        }
    );
}

#[test]
fn decision_table() {
    assert_eq!(strategy_of(&LegacyHost::Es5), wrapped(true, true));
    assert_eq!(
        strategy_of(&LegacyHost::PrimitiveTargetsRejected),
        wrapped(true, false)
    );
    assert_eq!(
        strategy_of(&LegacyHost::SymbolKeysStringified),
        wrapped(false, true)
    );
}

#[test]
fn broken_primitives_are_demoted() {
    assert_eq!(strategy_of(&LegacyHost::DomOnly), fallback(false, true));
    assert_eq!(strategy_of(&LegacyHost::DomBroken), fallback(true, false));
    assert_eq!(
        strategy_of(&LegacyHost::StringIndexBroken),
        fallback(false, true)
    );
    assert_eq!(
        strategy_of(&LegacyHost::OrdinaryObjectsRejected),
        fallback(true, false)
    );
}

#[test]
fn capabilities_record_each_check() {
    let agent = Agent::new(Options::default(), &LegacyHost::Es5);
    let capabilities = agent.descriptor_resolver().capabilities();
    assert!(capabilities.native);
    assert_eq!(capabilities.works_on_dom, Some(true));
    assert_eq!(capabilities.works_on_string_index, Some(true));
    assert_eq!(capabilities.works_on_objects, Some(true));
    assert_eq!(capabilities.works_on_primitives, Some(false));
    // Es5 has no Symbols, so the Symbol key check never runs.
    assert_eq!(capabilities.works_on_symbol_keys, None);

    let agent = Agent::new(Options::default(), &LegacyHost::SymbolKeysStringified);
    let capabilities = agent.descriptor_resolver().capabilities();
    assert_eq!(capabilities.works_on_primitives, Some(true));
    assert_eq!(capabilities.works_on_symbol_keys, Some(false));

    let agent = Agent::new(Options::default(), &LegacyHost::StringIndexBroken);
    let capabilities = agent.descriptor_resolver().capabilities();
    assert_eq!(capabilities.works_on_dom, Some(true));
    assert_eq!(capabilities.works_on_string_index, Some(false));
    assert_eq!(capabilities.works_on_objects, None);
}

#[test]
fn the_probe_runs_once_per_agent() {
    let agent = Agent::new(Options::default(), &LegacyHost::Es5);
    let first = agent.descriptor_resolver();
    let second = agent.descriptor_resolver();
    assert_eq!(first.strategy(), second.strategy());
    assert_eq!(first.capabilities(), second.capabilities());
}

fn getter(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Number(7.0))
}

#[test]
fn accessors_read_as_data_without_lookup_hooks() {
    let mut agent = Agent::new(Options::default(), &LegacyHost::Es3WithoutAccessors);
    let function = create_builtin_function(
        &mut agent,
        Behaviour::Regular(getter),
        BuiltinFunctionArgs::new(0, "get"),
    );
    let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let key = PropertyKey::from_str(&mut agent, "k");
    define_property_or_throw(
        &mut agent,
        obj,
        key,
        PropertyDescriptor {
            get: Some(Some(function.into())),
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
    assert_eq!(desc.value, Some(Value::Number(7.0)));
    assert_eq!(desc.writable, Some(true));
    assert_eq!(desc.get, None);
}
