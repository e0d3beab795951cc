// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod get_own_property_descriptor;
mod object_constructor;
mod object_prototype;

pub use get_own_property_descriptor::{
    Capabilities, DescriptorResolver, Strategy, get_own_property_descriptor,
};
pub use object_constructor::ObjectConstructor;
pub(crate) use object_prototype::{ObjectPrototype, property_is_enumerable};
