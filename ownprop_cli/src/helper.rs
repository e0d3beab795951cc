// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use console::{Style, style};
use ownprop_vm::{
    Capabilities,
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{create_data_property_or_throw, define_property_or_throw},
            type_conversion::to_string,
        },
        builtins::ordinary_object_create_with_intrinsics,
        execution::{Agent, JsError, JsResult, ProtoIntrinsics},
        types::{Function, Object, PropertyDescriptor, PropertyKey, Value, number_to_string},
    },
};

/// Builds a value from JSON. Arrays become plain objects with index keys and
/// a non-enumerable `length`.
pub fn json_to_value(agent: &mut Agent, json: &serde_json::Value) -> JsResult<Value> {
    let value = match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(bool) => Value::Boolean(*bool),
        serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(string) => Value::from_str(agent, string),
        serde_json::Value::Array(elements) => {
            let obj: Object =
                ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object)).into();
            for (index, element) in elements.iter().enumerate() {
                let element = json_to_value(agent, element)?;
                let key = PropertyKey::Integer(index as i64);
                create_data_property_or_throw(agent, obj, key, element)?;
            }
            let length = PropertyKey::from_str(agent, "length");
            define_property_or_throw(
                agent,
                obj,
                length,
                PropertyDescriptor {
                    value: Some(Value::Number(elements.len() as f64)),
                    writable: Some(true),
                    enumerable: Some(false),
                    configurable: Some(false),
                    ..Default::default()
                },
            )?;
            obj.into()
        }
        serde_json::Value::Object(entries) => {
            let obj: Object =
                ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object)).into();
            for (key, entry) in entries {
                let entry = json_to_value(agent, entry)?;
                let key = PropertyKey::from_str(agent, key);
                create_data_property_or_throw(agent, obj, key, entry)?;
            }
            obj.into()
        }
    };
    Ok(value)
}

fn display_value(agent: &mut Agent, value: Value) -> String {
    match value {
        Value::Undefined => "undefined".to_owned(),
        Value::Null => "null".to_owned(),
        Value::Boolean(bool) => bool.to_string(),
        Value::Number(number) => number_to_string(agent, number).to_string_lossy(agent),
        Value::String(string) => format!("{:?}", string.to_string_lossy(agent)),
        Value::Symbol(symbol) => symbol.descriptive_string(agent).to_string_lossy(agent),
        Value::Object(obj) => display_object(agent, obj),
    }
}

fn display_object(agent: &mut Agent, obj: Object) -> String {
    match Function::try_from(obj) {
        Ok(Function::BuiltinFunction(function)) => {
            let name = function
                .name(agent)
                .map(|name| name.to_string_lossy(agent))
                .unwrap_or_default();
            format!("[Function: {name}]")
        }
        Err(()) => match to_string(agent, obj.into()) {
            Ok(string) => string.to_string_lossy(agent),
            Err(_) => "[object]".to_owned(),
        },
    }
}

fn display_function(agent: &mut Agent, function: Option<Function>) -> String {
    match function {
        Some(function) => display_object(agent, function.into()),
        None => "undefined".to_owned(),
    }
}

/// Renders a descriptor as an object literal with the fields it has.
pub fn format_descriptor(agent: &mut Agent, desc: Option<PropertyDescriptor>) -> String {
    let Some(desc) = desc else {
        return style("undefined").dim().to_string();
    };
    let key = Style::new().green();
    let mut fields = Vec::new();
    if let Some(value) = desc.value {
        fields.push(format!("{}: {}", key.apply_to("value"), display_value(agent, value)));
    }
    if let Some(writable) = desc.writable {
        fields.push(format!("{}: {writable}", key.apply_to("writable")));
    }
    if let Some(get) = desc.get {
        fields.push(format!("{}: {}", key.apply_to("get"), display_function(agent, get)));
    }
    if let Some(set) = desc.set {
        fields.push(format!("{}: {}", key.apply_to("set"), display_function(agent, set)));
    }
    if let Some(enumerable) = desc.enumerable {
        fields.push(format!("{}: {enumerable}", key.apply_to("enumerable")));
    }
    if let Some(configurable) = desc.configurable {
        fields.push(format!("{}: {configurable}", key.apply_to("configurable")));
    }
    format!("{{ {} }}", fields.join(", "))
}

/// Renders every capability check, one per line.
pub fn format_capabilities(capabilities: &Capabilities) -> String {
    fn check(result: Option<bool>) -> String {
        match result {
            Some(true) => style("yes").green().to_string(),
            Some(false) => style("no").red().to_string(),
            None => style("skipped").dim().to_string(),
        }
    }
    let rows = [
        ("native primitive", Some(capabilities.native)),
        ("DOM elements", capabilities.works_on_dom),
        ("string indices", capabilities.works_on_string_index),
        ("plain objects", capabilities.works_on_objects),
        ("primitive targets", capabilities.works_on_primitives),
        ("symbol keys", capabilities.works_on_symbol_keys),
        ("legacy accessor hooks", Some(capabilities.legacy_accessor_hooks)),
    ];
    rows.iter()
        .map(|(name, result)| format!("  {name:<22}{}\n", check(*result)))
        .collect()
}

/// Prints the thrown value to stderr and exits.
pub fn exit_with_js_error(agent: &mut Agent, error: JsError) -> ! {
    let message = error.message(agent);
    eprintln!("{}: {message}", style("Uncaught exception").red().bold());
    std::process::exit(1);
}
