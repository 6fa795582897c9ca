//! Polymorphic JSON values used across the option types.
//!
//! Each wrapper is a closed sum type with one variant per JSON shape the
//! rendering engine accepts for a field. Decoding dispatches on the JSON type
//! and encoding re-emits the held variant as-is, so a document survives a
//! decode/encode round trip without being normalized (a number stays a
//! number, a one-element array stays an array). Wrong JSON types surface as
//! [`DecodeError`]; reading the wrong variant surfaces as [`TypeMismatch`].

pub mod array_or_single;
pub mod error;
pub mod kind;
pub mod nullable;
pub mod string_or_bool;
pub mod string_or_number;

pub use array_or_single::ArrayOrSingle;
pub use error::{DecodeError, TypeMismatch};
pub use kind::{Alternative, JsonKind};
pub use nullable::Nullable;
pub use string_or_bool::StringOrBool;
pub use string_or_number::StringOrNumber;
