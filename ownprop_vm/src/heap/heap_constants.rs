// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Well-known symbols
//!
//! The well-known symbols are allocated first in every heap, so their
//! handles are compile-time constants.

use crate::{
    ecmascript::types::{PropertyKey, Symbol},
    heap::indexes::SymbolIndex,
};

/// ### [6.1.5.1 Well-Known Symbols](https://tc39.es/ecma262/#sec-well-known-symbols)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
    ToStringTag,
}

impl WellKnownSymbolIndexes {
    pub(crate) const ALL: [WellKnownSymbolIndexes; 2] = [Self::ToPrimitive, Self::ToStringTag];

    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::ToPrimitive => "Symbol.toPrimitive",
            Self::ToStringTag => "Symbol.toStringTag",
        }
    }

    pub const fn to_symbol(self) -> Symbol {
        Symbol(SymbolIndex::from_u32_index(self as u32))
    }

    pub const fn to_property_key(self) -> PropertyKey {
        PropertyKey::Symbol(self.to_symbol())
    }
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        value.to_symbol()
    }
}

impl From<WellKnownSymbolIndexes> for PropertyKey {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        value.to_property_key()
    }
}
