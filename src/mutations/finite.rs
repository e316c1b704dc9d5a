//! Serializers that reject NaN and infinite numbers.
//!
//! `serde_json` writes non-finite floats as `null`. These fail instead, so
//! the request ends in [`GraphqlError::Encoding`](crate::GraphqlError::Encoding)
//! before anything is sent.

use serde::{ser, Serializer};

/// Serializes a required `f64`.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(ser::Error::custom(format!("non-finite number: {value}")))
    }
}

/// Serializes an optional `f64`; `None` is left to `skip_serializing_if`.
pub fn serialize_option<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize(value, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "super::serialize")]
        value: f64,
        #[serde(serialize_with = "super::serialize_option")]
        width: Option<f64>,
    }

    #[test]
    fn test_finite_values_serialize_as_numbers() {
        let json = serde_json::to_string(&Sample {
            value: 1.5,
            width: Some(390.0),
        })
        .unwrap();

        assert_eq!(json, r#"{"value":1.5,"width":390.0}"#);
    }

    #[test]
    fn test_nan_and_infinity_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = serde_json::to_string(&Sample { value, width: None }).unwrap_err();
            assert!(error.to_string().contains("non-finite number"));
        }
    }

    #[test]
    fn test_non_finite_optional_is_rejected() {
        let result = serde_json::to_string(&Sample {
            value: 1.0,
            width: Some(f64::NAN),
        });

        assert!(result.is_err());
    }
}
