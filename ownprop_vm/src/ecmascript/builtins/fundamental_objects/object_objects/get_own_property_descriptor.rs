// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A host-aware `Object.getOwnPropertyDescriptor`.
//!
//! Hosts may lack a native descriptor primitive or ship one that is only
//! partly conformant. When an [`Agent`] is created its host is probed once
//! and one of three strategies is selected: call the native primitive
//! directly, call it behind a coercing wrapper, or compute descriptors from
//! observable object behaviour. Every later call dispatches on the stored
//! [`Strategy`] without probing again.

mod capability_probe;
mod fallback;

use core::fmt;

use fallback::{Fallback, LegacyAccessorHooks};

use crate::ecmascript::{
    abstract_operations::type_conversion::{to_object, to_property_key},
    execution::{Agent, JsResult, NativeGetOwnPropertyDescriptor},
    types::{PropertyDescriptor, Value},
};

/// What the capability probe found out about the host.
///
/// A check that was never run, because the host lacks the feature or an
/// earlier check already failed, is `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The host has a native descriptor primitive.
    pub native: bool,
    /// The primitive reads back a sentinel property of a DOM element.
    pub works_on_dom: Option<bool>,
    /// The primitive reports the index properties of String objects.
    pub works_on_string_index: Option<bool>,
    /// The primitive reads back a sentinel property of a plain object.
    pub works_on_objects: Option<bool>,
    /// The primitive accepts primitive targets.
    pub works_on_primitives: Option<bool>,
    /// The primitive accepts boxed Symbol keys.
    pub works_on_symbol_keys: Option<bool>,
    /// `Object.prototype` carries `__lookupGetter__` and `__lookupSetter__`.
    pub legacy_accessor_hooks: bool,
}

/// How descriptors are retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The native primitive is called as is.
    Native,
    /// The native primitive is called with a coerced target, key or both.
    NativeWrapped {
        coerce_object: bool,
        coerce_key: bool,
    },
    /// Descriptors are computed from observable object behaviour. A demoted
    /// native primitive is tried first as fallback1 or fallback2.
    Fallback {
        fallback1: bool,
        fallback2: bool,
        legacy_accessor_hooks: bool,
    },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Native => f.write_str("native"),
            Strategy::NativeWrapped {
                coerce_object,
                coerce_key,
            } => match (coerce_object, coerce_key) {
                (true, true) => f.write_str("wrapped native (object and key coerced)"),
                (true, false) => f.write_str("wrapped native (object coerced)"),
                (false, true) => f.write_str("wrapped native (key coerced)"),
                (false, false) => f.write_str("wrapped native"),
            },
            Strategy::Fallback {
                fallback1,
                fallback2,
                legacy_accessor_hooks,
            } => {
                f.write_str("fallback")?;
                if fallback1 {
                    f.write_str(" with native as fallback1")?;
                } else if fallback2 {
                    f.write_str(" with native as fallback2")?;
                }
                if !legacy_accessor_hooks {
                    f.write_str(" without accessor detection")?;
                }
                Ok(())
            }
        }
    }
}

/// The probed, immutable configuration of `Object.getOwnPropertyDescriptor`
/// for one agent.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorResolver {
    capabilities: Capabilities,
    strategy: Strategy,
    native: Option<NativeGetOwnPropertyDescriptor>,
    legacy_accessor_hooks: Option<LegacyAccessorHooks>,
}

impl DescriptorResolver {
    /// Full fallback without accessor detection, held by an agent until its
    /// host has been probed.
    pub(crate) const UNPROBED: Self = Self {
        capabilities: Capabilities {
            native: false,
            works_on_dom: None,
            works_on_string_index: None,
            works_on_objects: None,
            works_on_primitives: None,
            works_on_symbol_keys: None,
            legacy_accessor_hooks: false,
        },
        strategy: Strategy::Fallback {
            fallback1: false,
            fallback2: false,
            legacy_accessor_hooks: false,
        },
        native: None,
        legacy_accessor_hooks: None,
    };

    /// Probes the agent's host and selects a strategy.
    pub fn probe(agent: &mut Agent) -> Self {
        capability_probe::probe(agent)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// ### [20.1.2.8 Object.getOwnPropertyDescriptor ( O, P )](https://tc39.es/ecma262/#sec-object.getownpropertydescriptor)
    ///
    /// Returns None if the object has no own property at the key. Throws a
    /// TypeError if `object` is undefined or null, or if `property` cannot
    /// be converted to a property key.
    pub fn resolve(
        self,
        agent: &mut Agent,
        object: Value,
        property: Value,
    ) -> JsResult<Option<PropertyDescriptor>> {
        match (self.strategy, self.native) {
            (Strategy::Native, Some(native)) => {
                Ok(native(agent, object, property)?.map(omit_missing_accessor_halves))
            }
            (
                Strategy::NativeWrapped {
                    coerce_object,
                    coerce_key,
                },
                Some(native),
            ) => {
                let object = if coerce_object {
                    to_object(agent, object)?.into()
                } else {
                    object
                };
                let property = if coerce_key {
                    to_property_key(agent, property)?.convert_to_value(agent)
                } else {
                    property
                };
                Ok(native(agent, object, property)?.map(omit_missing_accessor_halves))
            }
            _ => self.fallback().get_own_property_descriptor(agent, object, property),
        }
    }

    fn fallback(&self) -> Fallback {
        let (fallback1, fallback2) = match self.strategy {
            Strategy::Fallback {
                fallback1,
                fallback2,
                ..
            } => (
                self.native.filter(|_| fallback1),
                self.native.filter(|_| fallback2),
            ),
            _ => (None, None),
        };
        Fallback {
            fallback1,
            fallback2,
            legacy_accessor_hooks: self.legacy_accessor_hooks,
        }
    }
}

/// Makes a missing getter or setter an absent field instead of a present
/// `undefined`, the shape the fallback reports. An accessor without either
/// function keeps both fields, since it would otherwise stop being an
/// accessor descriptor.
fn omit_missing_accessor_halves(mut desc: PropertyDescriptor) -> PropertyDescriptor {
    if matches!(desc.get, Some(Some(_))) || matches!(desc.set, Some(Some(_))) {
        desc.get = desc.get.flatten().map(Some);
        desc.set = desc.set.flatten().map(Some);
    }
    desc
}

/// ### [20.1.2.8 Object.getOwnPropertyDescriptor ( O, P )](https://tc39.es/ecma262/#sec-object.getownpropertydescriptor)
///
/// Retrieves the descriptor of `object`'s own property `property` with the
/// strategy probed for the agent's host.
pub fn get_own_property_descriptor(
    agent: &mut Agent,
    object: Value,
    property: Value,
) -> JsResult<Option<PropertyDescriptor>> {
    agent.descriptor_resolver().resolve(agent, object, property)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        builtins::{ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function},
        execution::{DefaultHostHooks, LegacyHost, Options},
        types::Function,
    };

    fn noop(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::Undefined)
    }

    #[test]
    fn default_host_is_native() {
        let agent = Agent::new(Options::default(), &DefaultHostHooks);
        let resolver = agent.descriptor_resolver();
        assert_eq!(resolver.strategy(), Strategy::Native);
        let capabilities = resolver.capabilities();
        assert!(capabilities.native);
        assert_eq!(capabilities.works_on_dom, None);
        assert_eq!(capabilities.works_on_symbol_keys, Some(true));
    }

    #[test]
    fn forced_fallback_ignores_the_native_primitive() {
        let options = Options {
            force_fallback: true,
        };
        let agent = Agent::new(options, &DefaultHostHooks);
        let resolver = agent.descriptor_resolver();
        assert!(!resolver.capabilities().native);
        assert_eq!(
            resolver.strategy(),
            Strategy::Fallback {
                fallback1: false,
                fallback2: false,
                legacy_accessor_hooks: cfg!(feature = "annex-b"),
            }
        );
    }

    #[test]
    fn undefined_accessor_halves_become_absent() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let function: Function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(noop),
            BuiltinFunctionArgs::new(0, "get"),
        )
        .into();
        let getter_only = PropertyDescriptor {
            get: Some(Some(function)),
            set: Some(None),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        };
        assert_eq!(
            omit_missing_accessor_halves(getter_only),
            PropertyDescriptor {
                set: None,
                ..getter_only
            }
        );
        // Without either function the fields are what marks an accessor.
        let neither = PropertyDescriptor {
            get: Some(None),
            set: Some(None),
            ..getter_only
        };
        assert_eq!(omit_missing_accessor_halves(neither), neither);
        let data = PropertyDescriptor::new_data_descriptor(Value::Null);
        assert_eq!(omit_missing_accessor_halves(data), data);
    }

    #[test]
    fn strategies_display() {
        assert_eq!(Strategy::Native.to_string(), "native");
        let wrapped = Strategy::NativeWrapped {
            coerce_object: true,
            coerce_key: false,
        };
        assert_eq!(wrapped.to_string(), "wrapped native (object coerced)");
        let agent = Agent::new(Options::default(), &LegacyHost::DomBroken);
        assert_eq!(
            agent.descriptor_resolver().strategy().to_string(),
            "fallback with native as fallback1"
        );
    }
}
