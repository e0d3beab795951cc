// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, info};

use super::{Capabilities, DescriptorResolver, LegacyAccessorHooks, Strategy};
use crate::ecmascript::{
    abstract_operations::{operations_on_objects::set, type_conversion::to_object},
    builtins::{
        PrimitiveObject, PrimitiveObjectData, ordinary::ordinary_object_create_with_intrinsics,
    },
    execution::{Agent, NativeGetOwnPropertyDescriptor, ProtoIntrinsics},
    types::{Object, PropertyKey, String, Symbol, Value},
};

/// Runs the capability checks in order, stopping at the first failure.
pub(super) fn probe(agent: &mut Agent) -> DescriptorResolver {
    let legacy_accessor_hooks = LegacyAccessorHooks::detect(agent);
    let mut capabilities = Capabilities {
        legacy_accessor_hooks: legacy_accessor_hooks.is_some(),
        ..Default::default()
    };
    let fallback = |capabilities: Capabilities,
                    native: Option<NativeGetOwnPropertyDescriptor>,
                    fallback1: bool,
                    fallback2: bool| {
        resolver(
            capabilities,
            Strategy::Fallback {
                fallback1,
                fallback2,
                legacy_accessor_hooks: legacy_accessor_hooks.is_some(),
            },
            native,
            legacy_accessor_hooks,
        )
    };

    let native = if agent.options().force_fallback {
        debug!("native primitive ignored by options");
        None
    } else {
        agent.host_hooks().host_get_own_property_descriptor()
    };
    let Some(native) = native else {
        debug!("host has no native primitive");
        return fallback(capabilities, None, false, false);
    };
    capabilities.native = true;

    if let Some(element) = agent.host_hooks().host_create_element(agent) {
        let works = reads_back_sentinel(agent, native, element);
        debug!(works, "DOM element check");
        capabilities.works_on_dom = Some(works);
        if !works {
            return fallback(capabilities, Some(native), true, false);
        }
    }

    let works = reads_string_index(agent, native);
    debug!(works, "String index check");
    capabilities.works_on_string_index = Some(works);
    if !works {
        return fallback(capabilities, Some(native), false, true);
    }

    let object = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    let works = reads_back_sentinel(agent, native, object.into());
    debug!(works, "plain object check");
    capabilities.works_on_objects = Some(works);
    if !works {
        return fallback(capabilities, Some(native), true, false);
    }

    let name = Value::from_str(agent, "name");
    let works_on_primitives = native(agent, Value::Number(42.0), name).is_ok();
    debug!(works = works_on_primitives, "primitive target check");
    capabilities.works_on_primitives = Some(works_on_primitives);

    let works_on_symbol_keys = if agent.host_hooks().host_supports_symbols() {
        let works = reads_boxed_symbol_key(agent, native);
        debug!(works, "Symbol key check");
        capabilities.works_on_symbol_keys = Some(works);
        works
    } else {
        debug!("host has no Symbols, Symbol key check skipped");
        false
    };

    let strategy = match (works_on_symbol_keys, works_on_primitives) {
        (true, true) => Strategy::Native,
        (true, false) => Strategy::NativeWrapped {
            coerce_object: true,
            coerce_key: false,
        },
        (false, true) => Strategy::NativeWrapped {
            coerce_object: false,
            coerce_key: true,
        },
        (false, false) => Strategy::NativeWrapped {
            coerce_object: true,
            coerce_key: true,
        },
    };
    resolver(capabilities, strategy, Some(native), legacy_accessor_hooks)
}

fn resolver(
    capabilities: Capabilities,
    strategy: Strategy,
    native: Option<NativeGetOwnPropertyDescriptor>,
    legacy_accessor_hooks: Option<LegacyAccessorHooks>,
) -> DescriptorResolver {
    info!(%strategy, "selected Object.getOwnPropertyDescriptor strategy");
    DescriptorResolver {
        capabilities,
        strategy,
        native,
        legacy_accessor_hooks,
    }
}

fn value_is_zero(value: Option<Value>) -> bool {
    value == Some(Value::Number(0.0))
}

/// Assigns `sentinel = 0` on the target and checks that the primitive reads
/// it back.
fn reads_back_sentinel(
    agent: &mut Agent,
    native: NativeGetOwnPropertyDescriptor,
    target: Object,
) -> bool {
    let key = PropertyKey::from_str(agent, "sentinel");
    if set(agent, target, key, Value::Number(0.0), true).is_err() {
        return false;
    }
    let sentinel = Value::from_str(agent, "sentinel");
    native(agent, target.into(), sentinel)
        .is_ok_and(|desc| value_is_zero(desc.and_then(|desc| desc.value)))
}

/// Reads index 1 of a boxed `"abc"`, which must be `"b"`.
fn reads_string_index(agent: &mut Agent, native: NativeGetOwnPropertyDescriptor) -> bool {
    let abc = String::from_str(agent, "abc");
    let boxed = PrimitiveObject::create(agent, PrimitiveObjectData::String(abc));
    let b = String::from_str(agent, "b");
    native(agent, boxed.into(), Value::Number(1.0))
        .is_ok_and(|desc| desc.and_then(|desc| desc.value) == Some(Value::String(b)))
}

/// Assigns a sentinel under a fresh Symbol and reads it back with the boxed
/// Symbol as the key.
fn reads_boxed_symbol_key(agent: &mut Agent, native: NativeGetOwnPropertyDescriptor) -> bool {
    let symbol = Symbol::new(agent, Some("sentinel"));
    let object = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    if set(agent, object.into(), symbol.into(), Value::Number(0.0), true).is_err() {
        return false;
    }
    let Ok(boxed) = to_object(agent, symbol.into()) else {
        return false;
    };
    native(agent, object.into(), boxed.into())
        .is_ok_and(|desc| value_is_zero(desc.and_then(|desc| desc.value)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, HostHooks, LegacyHost, Options};

    #[test]
    fn probing_twice_agrees() {
        let mut agent = Agent::new(Options::default(), &LegacyHost::Es5);
        let first = agent.descriptor_resolver();
        let second = probe(&mut agent);
        assert_eq!(first.strategy(), second.strategy());
        assert_eq!(first.capabilities(), second.capabilities());
    }

    #[test]
    fn checks_after_a_failure_are_skipped() {
        let agent = Agent::new(Options::default(), &LegacyHost::DomBroken);
        let capabilities = agent.descriptor_resolver().capabilities();
        assert_eq!(capabilities.works_on_dom, Some(false));
        assert_eq!(capabilities.works_on_string_index, None);
        assert_eq!(capabilities.works_on_objects, None);
        assert_eq!(capabilities.works_on_primitives, None);
        assert_eq!(capabilities.works_on_symbol_keys, None);
    }

    #[test]
    fn conformant_primitive_passes_every_check() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let native = agent
            .host_hooks()
            .host_get_own_property_descriptor()
            .unwrap();
        let element = LegacyHost::Evergreen.host_create_element(&mut agent).unwrap();
        assert!(reads_back_sentinel(&mut agent, native, element));
        assert!(reads_string_index(&mut agent, native));
        assert!(reads_boxed_symbol_key(&mut agent, native));
    }
}
