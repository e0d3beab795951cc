// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
        execution::{Agent, ExceptionType, JsResult},
        types::{Object, PropertyKey, String, Symbol, Value},
    },
    heap::{WellKnownSymbolIndexes, object_entry::ObjectEntryPropertyDescriptor},
};

pub(crate) struct SymbolPrototype;

struct SymbolPrototypeToString;
impl Builtin for SymbolPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(SymbolPrototype::to_string);
}

struct SymbolPrototypeValueOf;
impl Builtin for SymbolPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(SymbolPrototype::value_of);
}

struct SymbolPrototypeToPrimitive;
impl Builtin for SymbolPrototypeToPrimitive {
    const NAME: &'static str = "[Symbol.toPrimitive]";

    const KEY: Option<PropertyKey> = Some(WellKnownSymbolIndexes::ToPrimitive.to_property_key());

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(SymbolPrototype::value_of);

    const WRITABLE: bool = false;
}

impl SymbolPrototype {
    /// ### [20.4.3.3 Symbol.prototype.toString ( )](https://tc39.es/ecma262/#sec-symbol.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let sym be ? ThisSymbolValue(this value).
        let sym = this_symbol_value(agent, this_value)?;
        // 2. Return SymbolDescriptiveString(sym).
        Ok(sym.descriptive_string(agent).into())
    }

    /// ### [20.4.3.4 Symbol.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-symbol.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisSymbolValue(this value).
        this_symbol_value(agent, this_value).map(Value::Symbol)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().symbol_prototype();
        let to_string_tag = String::from_str(agent, "Symbol");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(4)
            .with_builtin_function_property::<SymbolPrototypeToString>()
            .with_builtin_function_property::<SymbolPrototypeValueOf>()
            .with_builtin_function_property::<SymbolPrototypeToPrimitive>()
            .with_property(
                WellKnownSymbolIndexes::ToStringTag.to_property_key(),
                ObjectEntryPropertyDescriptor::data(to_string_tag.into(), false, false, true),
            )
            .build();
    }
}

#[inline(always)]
fn this_symbol_value(agent: &mut Agent, value: Value) -> JsResult<Symbol> {
    match value {
        Value::Symbol(symbol) => Ok(symbol),
        Value::Object(Object::PrimitiveObject(object)) => match object.data(agent) {
            PrimitiveObjectData::Symbol(symbol) => Ok(symbol),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a symbol")),
        },
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a symbol")),
    }
}
