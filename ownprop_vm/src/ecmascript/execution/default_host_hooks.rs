// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{HostHooks, NativeGetOwnPropertyDescriptor};
use crate::ecmascript::builtins::fundamental_objects::object_objects::ObjectConstructor;

/// A modern, conformant host without a document.
#[derive(Debug)]
pub struct DefaultHostHooks;

impl HostHooks for DefaultHostHooks {
    fn host_get_own_property_descriptor(&self) -> Option<NativeGetOwnPropertyDescriptor> {
        Some(ObjectConstructor::get_own_property_descriptor)
    }

    fn host_supports_legacy_accessors(&self) -> bool {
        cfg!(feature = "annex-b")
    }
}
