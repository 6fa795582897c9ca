use crate::value::error::{DecodeError, TypeMismatch};
use crate::value::kind::{Alternative, JsonKind};
use serde::de::value::{
    BoolDeserializer, BorrowedStrDeserializer, F64Deserializer, I64Deserializer,
    MapAccessDeserializer, StrDeserializer, StringDeserializer, U64Deserializer,
};
use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::slice;

/// A value written either as one `T` or as a JSON array of `T`.
///
/// Typical uses are a radius given as `30` or `["40%", "70%"]`, and root keys
/// such as `xAxis` that take one component or several. A one-element array
/// stays an array on re-encode. `T` must not itself deserialize from a JSON
/// array; such a value would always land in the `Array` alternative.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayOrSingle<T> {
    Single(T),
    Array(Vec<T>),
}

impl<T> ArrayOrSingle<T> {
    pub fn single(value: T) -> Self {
        ArrayOrSingle::Single(value)
    }

    pub fn array(values: impl IntoIterator<Item = T>) -> Self {
        ArrayOrSingle::Array(values.into_iter().collect())
    }

    pub fn alternative(&self) -> Alternative {
        match self {
            ArrayOrSingle::Single(_) => Alternative::Single,
            ArrayOrSingle::Array(_) => Alternative::Array,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ArrayOrSingle::Array(_))
    }

    pub fn as_single(&self) -> Result<&T, TypeMismatch> {
        match self {
            ArrayOrSingle::Single(value) => Ok(value),
            other => Err(TypeMismatch::new(Alternative::Single, other.alternative())),
        }
    }

    pub fn as_array(&self) -> Result<&[T], TypeMismatch> {
        match self {
            ArrayOrSingle::Array(values) => Ok(values),
            other => Err(TypeMismatch::new(Alternative::Array, other.alternative())),
        }
    }

    /// Both alternatives viewed as a slice; a single value is a one-element
    /// slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            ArrayOrSingle::Single(value) => slice::from_ref(value),
            ArrayOrSingle::Array(values) => values,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            ArrayOrSingle::Single(value) => slice::from_mut(value),
            ArrayOrSingle::Array(values) => values,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            ArrayOrSingle::Single(value) => vec![value],
            ArrayOrSingle::Array(values) => values,
        }
    }
}

impl<T: DeserializeOwned> ArrayOrSingle<T> {
    /// Decode a generic JSON value, naming `field` on failure. Array elements
    /// are reported as `field/index`.
    pub fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| decode_item(&format!("{field}/{idx}"), item))
                .collect::<Result<Vec<_>, _>>()
                .map(ArrayOrSingle::Array),
            Value::Null => Err(DecodeError::unexpected(
                field,
                "a single value or an array of values",
                value,
            )),
            other => decode_item(field, other).map(ArrayOrSingle::Single),
        }
    }
}

fn decode_item<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, DecodeError> {
    T::deserialize(value).map_err(|err| DecodeError::new(field, err.to_string(), JsonKind::of(value)))
}

impl<T> From<Vec<T>> for ArrayOrSingle<T> {
    fn from(values: Vec<T>) -> Self {
        ArrayOrSingle::Array(values)
    }
}

impl<'a, T> IntoIterator for &'a ArrayOrSingle<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ArrayOrSingle<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ArrayOrSingle::Single(value) => value.serialize(serializer),
            ArrayOrSingle::Array(values) => values.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayOrSingle<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ArrayOrSingleVisitor(PhantomData))
    }
}

struct ArrayOrSingleVisitor<T>(PhantomData<T>);

// Non-sequence input is handed back to `T` through a one-shot deserializer so
// `T` decides which scalars (or objects) it accepts.
impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrayOrSingleVisitor<T> {
    type Value = ArrayOrSingle<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single value or an array of values")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        let inner: BoolDeserializer<E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        let inner: I64Deserializer<E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let inner: U64Deserializer<E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        let inner: F64Deserializer<E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let inner: StrDeserializer<'_, E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_borrowed_str<E: de::Error>(self, value: &'de str) -> Result<Self::Value, E> {
        let inner: BorrowedStrDeserializer<'de, E> = BorrowedStrDeserializer::new(value);
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        let inner: StringDeserializer<E> = value.into_deserializer();
        T::deserialize(inner).map(ArrayOrSingle::Single)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(MapAccessDeserializer::new(map)).map(ArrayOrSingle::Single)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(ArrayOrSingle::Array(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StringOrNumber;
    use serde_json::{Number, json};

    #[test]
    fn rotate_sensitivity_keeps_its_shape() {
        let pair: ArrayOrSingle<Number> = serde_json::from_str("[1, 0]").unwrap();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.as_array().unwrap(), &[Number::from(1), Number::from(0)]);
        assert_eq!(serde_json::to_string(&pair).unwrap(), "[1,0]");

        let single: ArrayOrSingle<Number> = serde_json::from_str("1").unwrap();
        assert_eq!(single.as_single().unwrap(), &Number::from(1));
        assert_eq!(serde_json::to_string(&single).unwrap(), "1");
    }

    #[test]
    fn mixed_radius_preserves_element_order_and_kinds() {
        let radius: ArrayOrSingle<StringOrNumber> =
            serde_json::from_value(json!(["40%", 70])).unwrap();
        let items = radius.as_array().unwrap();
        assert_eq!(items[0], StringOrNumber::from("40%"));
        assert_eq!(items[1], StringOrNumber::from(70));
        assert_eq!(serde_json::to_value(&radius).unwrap(), json!(["40%", 70]));
    }

    #[test]
    fn one_element_array_is_not_collapsed() {
        let value: ArrayOrSingle<StringOrNumber> = serde_json::from_value(json!([5])).unwrap();
        assert_eq!(value.alternative(), Alternative::Array);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([5]));
        assert_eq!(value.as_single().unwrap_err().held, Alternative::Array);
    }

    #[test]
    fn rejects_shapes_the_element_type_does_not_accept() {
        assert!(serde_json::from_value::<ArrayOrSingle<StringOrNumber>>(json!({"a": 1})).is_err());
        assert!(serde_json::from_value::<ArrayOrSingle<StringOrNumber>>(json!(null)).is_err());
        assert!(serde_json::from_value::<ArrayOrSingle<StringOrNumber>>(json!([1, {}])).is_err());
    }

    #[test]
    fn objects_are_accepted_when_the_element_type_is_a_struct() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Named {
            name: String,
        }

        let one: ArrayOrSingle<Named> = serde_json::from_value(json!({"name": "a"})).unwrap();
        assert_eq!(one.first().map(|n| n.name.as_str()), Some("a"));
        let many: ArrayOrSingle<Named> =
            serde_json::from_value(json!([{"name": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(many.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn explicit_decode_reports_element_path() {
        let err = ArrayOrSingle::<StringOrNumber>::decode("radius", &json!(["10%", true]))
            .unwrap_err();
        assert_eq!(err.field, "radius/1");
        assert_eq!(err.found, JsonKind::Bool);

        let err = ArrayOrSingle::<StringOrNumber>::decode("radius", &json!(null)).unwrap_err();
        assert_eq!(err.field, "radius");
        assert_eq!(err.found, JsonKind::Null);

        let ok = ArrayOrSingle::<StringOrNumber>::decode("radius", &json!("50%")).unwrap();
        assert_eq!(ok, ArrayOrSingle::single(StringOrNumber::from("50%")));
    }

    #[test]
    fn slice_view_is_total() {
        let single = ArrayOrSingle::single(3);
        assert_eq!(single.as_slice(), &[3]);
        let many = ArrayOrSingle::array([1, 2, 3]);
        assert_eq!(many.iter().sum::<i32>(), 6);
        assert_eq!(many.into_vec(), vec![1, 2, 3]);
    }
}
