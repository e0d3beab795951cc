// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::{Function, PropertyDescriptor, Value};

/// A complete property descriptor as stored in an object's property table.
///
/// Accessor properties are split by which of their functions are present so
/// that an absent getter or setter never needs an `Option` at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ObjectEntryPropertyDescriptor {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    /// Accessor property with both \[\[Get]] and \[\[Set]] undefined.
    Blocked {
        enumerable: bool,
        configurable: bool,
    },
    ReadOnly {
        get: Function,
        enumerable: bool,
        configurable: bool,
    },
    WriteOnly {
        set: Function,
        enumerable: bool,
        configurable: bool,
    },
    ReadWrite {
        get: Function,
        set: Function,
        enumerable: bool,
        configurable: bool,
    },
}

impl ObjectEntryPropertyDescriptor {
    pub(crate) fn data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self::Data {
            value,
            writable,
            enumerable,
            configurable,
        }
    }

    pub(crate) fn accessor(
        get: Option<Function>,
        set: Option<Function>,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        match (get, set) {
            (None, None) => Self::Blocked {
                enumerable,
                configurable,
            },
            (Some(get), None) => Self::ReadOnly {
                get,
                enumerable,
                configurable,
            },
            (None, Some(set)) => Self::WriteOnly {
                set,
                enumerable,
                configurable,
            },
            (Some(get), Some(set)) => Self::ReadWrite {
                get,
                set,
                enumerable,
                configurable,
            },
        }
    }

    /// Stores a descriptor, filling every absent field with its default
    /// attribute value.
    pub(crate) fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        let enumerable = descriptor.enumerable.unwrap_or(false);
        let configurable = descriptor.configurable.unwrap_or(false);
        if descriptor.is_accessor_descriptor() {
            Self::accessor(
                descriptor.get.flatten(),
                descriptor.set.flatten(),
                enumerable,
                configurable,
            )
        } else {
            Self::data(
                descriptor.value.unwrap_or(Value::Undefined),
                descriptor.writable.unwrap_or(false),
                enumerable,
                configurable,
            )
        }
    }

    pub(crate) fn enumerable(&self) -> bool {
        match *self {
            Self::Data { enumerable, .. }
            | Self::Blocked { enumerable, .. }
            | Self::ReadOnly { enumerable, .. }
            | Self::WriteOnly { enumerable, .. }
            | Self::ReadWrite { enumerable, .. } => enumerable,
        }
    }

    pub(crate) fn configurable(&self) -> bool {
        match *self {
            Self::Data { configurable, .. }
            | Self::Blocked { configurable, .. }
            | Self::ReadOnly { configurable, .. }
            | Self::WriteOnly { configurable, .. }
            | Self::ReadWrite { configurable, .. } => configurable,
        }
    }

    pub(crate) fn getter(&self) -> Option<Function> {
        match *self {
            Self::ReadOnly { get, .. } | Self::ReadWrite { get, .. } => Some(get),
            _ => None,
        }
    }

    pub(crate) fn setter(&self) -> Option<Function> {
        match *self {
            Self::WriteOnly { set, .. } | Self::ReadWrite { set, .. } => Some(set),
            _ => None,
        }
    }
}

impl From<ObjectEntryPropertyDescriptor> for PropertyDescriptor {
    fn from(value: ObjectEntryPropertyDescriptor) -> Self {
        match value {
            ObjectEntryPropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
                ..Default::default()
            },
            entry => PropertyDescriptor {
                get: Some(entry.getter()),
                set: Some(entry.setter()),
                enumerable: Some(entry.enumerable()),
                configurable: Some(entry.configurable()),
                ..Default::default()
            },
        }
    }
}
