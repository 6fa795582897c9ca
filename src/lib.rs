//! Typed chart option documents.
//!
//! The crate models the JSON "option" object consumed by an ECharts-style
//! rendering engine. Fields whose JSON shape is chosen by the document author
//! (a number or a percentage string, one value or an array, a flag or a mode
//! name) use the wrappers in [`value`]; the option components in [`options`]
//! are built from them. Documents can be validated against the bundled JSON
//! Schema, decoded and re-encoded without losing their shape ([`codec`]), and
//! assembled from layered fragments ([`overlay`]).

pub mod codec;
pub mod config;
pub mod options;
pub mod overlay;
pub mod schema_loader;
pub mod validation;
pub mod value;

pub use codec::{
    Codec, DocumentError, decode_str, decode_value, encode_array_string, encode_string,
    encode_value, is_array_stream, parse_option_stream, split_document_stream,
};
pub use config::CodecOptions;
pub use options::ChartOption;
pub use overlay::OverlayBuilder;
pub use schema_loader::SCHEMA_VERSION;
pub use validation::OptionSchema;
pub use value::{
    Alternative, ArrayOrSingle, DecodeError, JsonKind, Nullable, StringOrBool, StringOrNumber,
    TypeMismatch,
};
