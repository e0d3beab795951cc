// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7.4 Well-Known Intrinsic Objects](https://tc39.es/ecma262/#sec-well-known-intrinsic-objects)

use crate::{
    ecmascript::{
        builtins::{
            ElementPrototype,
            fundamental_objects::{
                boolean_objects::BooleanPrototype, error_objects::ErrorPrototype,
                object_objects::ObjectPrototype, symbol_objects::SymbolPrototype,
            },
            numbers_and_dates::number_objects::NumberPrototype,
            text_processing::string_objects::StringPrototype,
        },
        execution::Agent,
        types::{Object, ObjectHeapData, OrdinaryObject},
    },
    heap::{CreateHeapData, Heap},
};

/// Intrinsic prototypes that objects can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoIntrinsics {
    Boolean,
    Element,
    Error,
    Function,
    Number,
    Object,
    String,
    Symbol,
}

#[derive(Debug, Clone, Copy)]
pub struct Intrinsics {
    boolean_prototype: OrdinaryObject,
    element_prototype: OrdinaryObject,
    error_prototype: OrdinaryObject,
    function_prototype: OrdinaryObject,
    number_prototype: OrdinaryObject,
    object_prototype: OrdinaryObject,
    string_prototype: OrdinaryObject,
    symbol_prototype: OrdinaryObject,
}

impl Intrinsics {
    pub(crate) fn reserve(heap: &mut Heap) -> Self {
        // %Object.prototype% is the end of every prototype chain.
        let object_prototype: OrdinaryObject = heap.create(ObjectHeapData::new(None, true));
        let mut inheriting = || -> OrdinaryObject {
            heap.create(ObjectHeapData::new(Some(object_prototype.into()), true))
        };
        Self {
            boolean_prototype: inheriting(),
            element_prototype: inheriting(),
            error_prototype: inheriting(),
            function_prototype: inheriting(),
            number_prototype: inheriting(),
            object_prototype,
            string_prototype: inheriting(),
            symbol_prototype: inheriting(),
        }
    }

    pub(crate) fn create_intrinsics(agent: &mut Agent) {
        ObjectPrototype::create_intrinsic(agent);
        BooleanPrototype::create_intrinsic(agent);
        SymbolPrototype::create_intrinsic(agent);
        ErrorPrototype::create_intrinsic(agent);
        NumberPrototype::create_intrinsic(agent);
        StringPrototype::create_intrinsic(agent);
        ElementPrototype::create_intrinsic(agent);
    }

    pub(crate) fn get_intrinsic_default_proto(
        &self,
        intrinsic_default_proto: ProtoIntrinsics,
    ) -> Object {
        match intrinsic_default_proto {
            ProtoIntrinsics::Boolean => self.boolean_prototype(),
            ProtoIntrinsics::Element => self.element_prototype(),
            ProtoIntrinsics::Error => self.error_prototype(),
            ProtoIntrinsics::Function => self.function_prototype(),
            ProtoIntrinsics::Number => self.number_prototype(),
            ProtoIntrinsics::Object => self.object_prototype(),
            ProtoIntrinsics::String => self.string_prototype(),
            ProtoIntrinsics::Symbol => self.symbol_prototype(),
        }
        .into()
    }

    /// %Boolean.prototype%
    pub fn boolean_prototype(&self) -> OrdinaryObject {
        self.boolean_prototype
    }

    /// Prototype of host (DOM) elements.
    pub fn element_prototype(&self) -> OrdinaryObject {
        self.element_prototype
    }

    /// %Error.prototype%
    pub fn error_prototype(&self) -> OrdinaryObject {
        self.error_prototype
    }

    /// %Function.prototype%
    pub fn function_prototype(&self) -> OrdinaryObject {
        self.function_prototype
    }

    /// %Number.prototype%
    pub fn number_prototype(&self) -> OrdinaryObject {
        self.number_prototype
    }

    /// %Object.prototype%
    pub fn object_prototype(&self) -> OrdinaryObject {
        self.object_prototype
    }

    /// %String.prototype%
    pub fn string_prototype(&self) -> OrdinaryObject {
        self.string_prototype
    }

    /// %Symbol.prototype%
    pub fn symbol_prototype(&self) -> OrdinaryObject {
        self.symbol_prototype
    }
}
