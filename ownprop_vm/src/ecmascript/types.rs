// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub(crate) use language::{MAX_INTEGER_INDEX, is_integral_number};
pub use language::{
    Function, InternalMethods, InternalSlots, MAX_SAFE_INTEGER, Object, ObjectHeapData,
    OrdinaryObject, PropertyKey, PropertyStorage, String, StringHeapData, Symbol, SymbolHeapData,
    Value, number_to_string, parse_string_to_integer_property_key,
};
pub use spec::PropertyDescriptor;
