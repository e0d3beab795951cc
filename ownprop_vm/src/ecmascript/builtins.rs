// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [10 Ordinary and Exotic Objects Behaviours](https://tc39.es/ecma262/#sec-ordinary-and-exotic-objects-behaviours)
//!
//! Every object other than a plain object has a lazily created
//! `[[BackingObject]]` that holds its prototype, extensibility and ordinary
//! properties. Internal methods delegate "ordinary object business" to the
//! backing object if it exists.

pub(crate) mod builtin_function;
pub(crate) mod embedder_object;
pub(crate) mod error;
pub mod fundamental_objects;
pub(crate) mod numbers_and_dates;
pub(crate) mod ordinary;
pub(crate) mod primitive_objects;
pub(crate) mod text_processing;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs,
    BuiltinFunctionHeapData, RegularFn, create_builtin_function,
};
pub(crate) use embedder_object::ElementPrototype;
pub use embedder_object::{EmbedderObject, EmbedderObjectHeapData};
pub use error::{Error, ErrorHeapData};
pub use ordinary::ordinary_object_create_with_intrinsics;
pub use primitive_objects::{PrimitiveObject, PrimitiveObjectData, PrimitiveObjectHeapData};
