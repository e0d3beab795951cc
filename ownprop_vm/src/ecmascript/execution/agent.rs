// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)

use tracing::debug;

use super::Realm;
use crate::{
    ecmascript::{
        abstract_operations::type_conversion::to_string,
        builtins::{Error, fundamental_objects::object_objects::DescriptorResolver},
        types::{Object, PropertyDescriptor, String, Value},
    },
    heap::Heap,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Ignore the host's native descriptor primitive and always compute
    /// descriptors from observable object behaviour.
    pub force_fallback: bool,
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// The kind of the thrown Error object, or None if something other than
    /// an Error object was thrown.
    pub fn kind(self, agent: &Agent) -> Option<ExceptionType> {
        match self.0 {
            Value::Object(Object::Error(error)) => Some(error.kind(agent)),
            _ => None,
        }
    }

    /// Renders the thrown value as `Kind: message` for Error objects, or as
    /// its string conversion otherwise.
    pub fn message(self, agent: &mut Agent) -> std::string::String {
        if let Value::Object(Object::Error(error)) = self.0 {
            let kind = error.kind(agent).name();
            return match error.message(agent) {
                Some(message) => format!("{kind}: {}", message.to_string_lossy(agent)),
                None => kind.to_owned(),
            };
        }
        match to_string(agent, self.0) {
            Ok(string) => string.to_string_lossy(agent),
            Err(_) => "<uncaught non-printable value>".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    RangeError,
    TypeError,
}

impl ExceptionType {
    pub const fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

/// The host's own `Object.getOwnPropertyDescriptor` primitive, called with
/// the target and key exactly as the caller passed them.
pub type NativeGetOwnPropertyDescriptor =
    fn(&mut Agent, Value, Value) -> JsResult<Option<PropertyDescriptor>>;

/// Capabilities of the environment the agent is embedded in.
pub trait HostHooks: std::fmt::Debug {
    /// The host's native `Object.getOwnPropertyDescriptor`, if it has one.
    fn host_get_own_property_descriptor(&self) -> Option<NativeGetOwnPropertyDescriptor> {
        None
    }

    /// Creates a host (DOM) element, or returns None if the host has no
    /// document.
    fn host_create_element(&self, _agent: &mut Agent) -> Option<Object> {
        None
    }

    /// Whether Symbol values exist in this host.
    fn host_supports_symbols(&self) -> bool {
        true
    }

    /// Whether `Object.prototype` carries `__defineGetter__` and friends.
    fn host_supports_legacy_accessors(&self) -> bool {
        true
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    realm: Realm,
    host_hooks: &'static dyn HostHooks,
    descriptor_resolver: DescriptorResolver,
}

impl Agent {
    /// Creates an agent with a fully initialized realm, then probes the
    /// host's descriptor capabilities.
    pub fn new(options: Options, host_hooks: &'static dyn HostHooks) -> Self {
        let mut heap = Heap::new();
        let realm = Realm::new(&mut heap);
        let mut agent = Self {
            heap,
            options,
            realm,
            host_hooks,
            descriptor_resolver: DescriptorResolver::UNPROBED,
        };
        Realm::initialize_intrinsics(&mut agent);
        debug!(?host_hooks, ?options, "agent initialized");
        agent.descriptor_resolver = DescriptorResolver::probe(&mut agent);
        agent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn host_hooks(&self) -> &'static dyn HostHooks {
        self.host_hooks
    }

    pub fn current_realm(&self) -> &Realm {
        &self.realm
    }

    /// The resolver chosen when this agent was created.
    pub fn descriptor_resolver(&self) -> DescriptorResolver {
        self.descriptor_resolver
    }

    /// Creates an Error object of the given kind and returns it as a thrown
    /// value.
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        let message = String::from_str(self, message);
        let error = Error::create(self, kind, Some(message));
        JsError::new(Value::Object(error.into()))
    }

    pub fn throw_exception_with_message(
        &mut self,
        kind: ExceptionType,
        message: std::string::String,
    ) -> JsError {
        self.throw_exception(kind, &message)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::DefaultHostHooks;

    #[test]
    fn thrown_errors_carry_kind_and_message() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error = agent.throw_exception(ExceptionType::TypeError, "not an object");
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        assert_eq!(error.message(&mut agent), "TypeError: not an object");
    }

    #[test]
    fn non_error_throw_values() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let value = Value::from_str(&mut agent, "boom");
        let error = JsError::new(value);
        assert_eq!(error.kind(&agent), None);
        assert_eq!(error.message(&mut agent), "boom");
    }

    #[test]
    fn resolver_is_probed_at_creation() {
        let agent = Agent::new(Options::default(), &DefaultHostHooks);
        let shared: &Agent = &agent;
        let resolver = shared.descriptor_resolver();
        assert_ne!(
            resolver.strategy(),
            DescriptorResolver::UNPROBED.strategy()
        );
        assert!(resolver.capabilities().native);
        assert_eq!(
            shared.descriptor_resolver().capabilities(),
            resolver.capabilities()
        );
    }
}
