// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An ECMAScript object model with a host-aware
//! `Object.getOwnPropertyDescriptor`.
//!
//! An [`Agent`](ecmascript::execution::Agent) is created for a host
//! described by [`HostHooks`](ecmascript::execution::HostHooks). Creating it
//! probes the host's native descriptor primitive once; afterwards
//! [`get_own_property_descriptor`] answers with the strategy that the probe
//! found safe.

pub mod ecmascript;
pub mod heap;

pub use ecmascript::builtins::fundamental_objects::object_objects::{
    Capabilities, DescriptorResolver, Strategy, get_own_property_descriptor,
};
