//! Validation of the GeoJSON document shell.

use serde_json::Value;
use thiserror::Error;

/// Document-level failures. Either one aborts the load with no graphics.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text did not parse as JSON.
    #[error("GeoJSON is not valid JSON: {source}")]
    InvalidJson {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The top-level value was not an object.
    #[error("GeoJSON document is not an object but {found}")]
    NotAnObject {
        /// JSON type of the top-level value.
        found: &'static str,
    },
}

/// Parse document text and extract its `features` array.
///
/// A missing `features` member, or one that is not an array, yields an empty
/// feature list rather than an error. The top-level `type` member is not
/// checked.
///
/// # Errors
/// Returns [`DocumentError::InvalidJson`] for unparseable text and
/// [`DocumentError::NotAnObject`] when the top level is not an object.
///
/// # Examples
/// ```
/// use geoint_data::geojson::validate_document;
///
/// # fn main() -> Result<(), geoint_data::geojson::DocumentError> {
/// let features = validate_document(r#"{"features": [{"geometry": null}]}"#)?;
/// assert_eq!(features.len(), 1);
/// assert!(validate_document(r#"{"type": "FeatureCollection"}"#)?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn validate_document(text: &str) -> Result<Vec<Value>, DocumentError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| DocumentError::InvalidJson { source })?;
    validate_value(value)
}

/// Extract the `features` array from an already parsed document.
///
/// # Errors
/// Returns [`DocumentError::NotAnObject`] when the value is not an object.
pub fn validate_value(document: Value) -> Result<Vec<Value>, DocumentError> {
    let Value::Object(mut members) = document else {
        return Err(DocumentError::NotAnObject {
            found: json_type_name(&document),
        });
    };
    match members.remove("features") {
        Some(Value::Array(features)) => Ok(features),
        _ => Ok(Vec::new()),
    }
}

/// Name of a JSON value's type, for messages.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{not json")]
    #[case("")]
    #[case(r#"{"features": ["#)]
    fn rejects_unparseable_text(#[case] text: &str) {
        assert!(matches!(
            validate_document(text),
            Err(DocumentError::InvalidJson { .. })
        ));
    }

    #[rstest]
    #[case("[]", "an array")]
    #[case("42", "a number")]
    #[case(r#""features""#, "a string")]
    #[case("null", "null")]
    #[case("true", "a boolean")]
    fn rejects_non_object_documents(#[case] text: &str, #[case] expected: &str) {
        match validate_document(text) {
            Err(DocumentError::NotAnObject { found }) => assert_eq!(found, expected),
            other => panic!("expected NotAnObject, got {other:?}"),
        }
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"{"features": null}"#)]
    #[case(r#"{"features": {"0": {}}}"#)]
    #[case(r#"{"features": "many"}"#)]
    fn treats_missing_or_odd_features_as_empty(#[case] text: &str) {
        let features = validate_document(text).unwrap_or_else(|err| panic!("{err}"));
        assert!(features.is_empty());
    }

    #[rstest]
    fn keeps_feature_order() {
        let features = validate_document(r#"{"features": [1, "two", {"three": 3}]}"#)
            .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(features.len(), 3);
        assert_eq!(features.first(), Some(&Value::from(1)));
    }
}
