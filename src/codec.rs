//! Decoding and encoding of whole option documents.
//!
//! Decoding optionally runs the option schema first so that type errors are
//! reported per field (with a JSON pointer) instead of as the first serde
//! failure. Encoding is always sparse: unset fields never appear.

use crate::config::CodecOptions;
use crate::options::ChartOption;
use crate::validation::OptionSchema;
use crate::value::{DecodeError, JsonKind};
use log::trace;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("line {line}: document is not valid JSON: {source}")]
    StreamLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("no documents found in input")]
    Empty,
    #[error("document failed schema validation: {}", join_errors(.0))]
    Invalid(Vec<DecodeError>),
    #[error("unable to decode document: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unable to encode document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("option schema unavailable: {0:#}")]
    Schema(anyhow::Error),
}

impl DocumentError {
    /// Field-level problems carried by this error, if any.
    pub fn decode_errors(&self) -> &[DecodeError] {
        match self {
            DocumentError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[DecodeError]) -> String {
    errors
        .iter()
        .map(DecodeError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks and decodes one document value.
///
/// Without a schema only the root type is checked up front; field type errors
/// then surface as [`DocumentError::Decode`].
pub fn decode_value(
    value: Value,
    schema: Option<&OptionSchema>,
) -> Result<ChartOption, DocumentError> {
    if !value.is_object() {
        return Err(DocumentError::Invalid(vec![DecodeError::new(
            "/",
            "expected an option object",
            JsonKind::of(&value),
        )]));
    }
    if let Some(schema) = schema {
        let errors = schema.validate(&value);
        if !errors.is_empty() {
            return Err(DocumentError::Invalid(errors));
        }
    }
    trace!("decoding option document with {} root key(s)", root_len(&value));
    serde_json::from_value(value).map_err(DocumentError::Decode)
}

pub fn decode_str(input: &str, schema: Option<&OptionSchema>) -> Result<ChartOption, DocumentError> {
    let value: Value = serde_json::from_str(input).map_err(DocumentError::Syntax)?;
    decode_value(value, schema)
}

pub fn encode_value(option: &ChartOption) -> Result<Value, DocumentError> {
    serde_json::to_value(option).map_err(DocumentError::Encode)
}

pub fn encode_string(option: &ChartOption, pretty: bool) -> Result<String, DocumentError> {
    if pretty {
        serde_json::to_string_pretty(option)
    } else {
        serde_json::to_string(option)
    }
    .map_err(DocumentError::Encode)
}

/// Encodes several documents as one JSON array.
pub fn encode_array_string(options: &[ChartOption], pretty: bool) -> Result<String, DocumentError> {
    if pretty {
        serde_json::to_string_pretty(options)
    } else {
        serde_json::to_string(options)
    }
    .map_err(DocumentError::Encode)
}

/// Whether `input` holds its documents in a top-level JSON array.
pub fn is_array_stream(input: &str) -> bool {
    input.trim_start().starts_with('[')
}

/// Splits input holding one document, a JSON array of documents, or
/// newline-delimited documents into raw values.
///
/// Items are not checked; a non-object array item is reported when it is
/// decoded.
pub fn split_document_stream(input: &str) -> Result<Vec<Value>, DocumentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DocumentError::Empty);
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(DocumentError::Empty);
                }
                Ok(items)
            }
            other => Ok(vec![other]),
        };
    }

    let mut documents = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|source| {
            DocumentError::StreamLine {
                line: idx + 1,
                source,
            }
        })?;
        documents.push(value);
    }
    trace!("split input into {} document(s)", documents.len());
    Ok(documents)
}

/// Decodes every document in a stream, stopping at the first failure.
pub fn parse_option_stream(
    input: &str,
    schema: Option<&OptionSchema>,
) -> Result<Vec<ChartOption>, DocumentError> {
    split_document_stream(input)?
        .into_iter()
        .map(|value| decode_value(value, schema))
        .collect()
}

fn root_len(value: &Value) -> usize {
    value.as_object().map_or(0, |map| map.len())
}

enum SchemaSource {
    Embedded(&'static OptionSchema),
    Loaded(Box<OptionSchema>),
}

/// Decoder/encoder bound to one set of [`CodecOptions`].
pub struct Codec {
    schema: Option<SchemaSource>,
    pretty: bool,
}

impl Codec {
    /// Resolves the schema named by `options` (none when validation is off).
    pub fn new(options: &CodecOptions) -> Result<Self, DocumentError> {
        let schema = if !options.validate {
            None
        } else if let Some(path) = &options.schema_path {
            let loaded = OptionSchema::load(path).map_err(DocumentError::Schema)?;
            Some(SchemaSource::Loaded(Box::new(loaded)))
        } else {
            let embedded = OptionSchema::embedded().map_err(DocumentError::Schema)?;
            Some(SchemaSource::Embedded(embedded))
        };
        Ok(Self {
            schema,
            pretty: options.pretty,
        })
    }

    pub fn schema(&self) -> Option<&OptionSchema> {
        match &self.schema {
            Some(SchemaSource::Embedded(schema)) => Some(*schema),
            Some(SchemaSource::Loaded(schema)) => Some(&**schema),
            None => None,
        }
    }

    pub fn decode_value(&self, value: Value) -> Result<ChartOption, DocumentError> {
        decode_value(value, self.schema())
    }

    pub fn decode_str(&self, input: &str) -> Result<ChartOption, DocumentError> {
        decode_str(input, self.schema())
    }

    pub fn parse_stream(&self, input: &str) -> Result<Vec<ChartOption>, DocumentError> {
        parse_option_stream(input, self.schema())
    }

    pub fn encode_string(&self, option: &ChartOption) -> Result<String, DocumentError> {
        encode_string(option, self.pretty)
    }

    pub fn encode_array_string(&self, options: &[ChartOption]) -> Result<String, DocumentError> {
        encode_array_string(options, self.pretty)
    }
}
