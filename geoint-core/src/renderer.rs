//! Simple renderers: one symbol applied to every graphic of an overlay.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::symbol::Symbol;

/// Value of the `type` member identifying a simple renderer.
pub const SIMPLE_RENDERER_TYPE: &str = "simple";

/// Errors raised while decoding or encoding renderer JSON.
#[derive(Debug, Error)]
pub enum RendererJsonError {
    /// The text was not JSON at all.
    #[error("renderer JSON is not well-formed: {source}")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON had no string `type` member.
    #[error("renderer JSON has no `type` member")]
    MissingType,
    /// Only simple renderers are supported.
    #[error("unsupported renderer type {kind:?}")]
    Unsupported {
        /// The rejected renderer type.
        kind: String,
    },
    /// The simple renderer's members were invalid, e.g. an unknown symbol.
    #[error("invalid simple renderer: {source}")]
    Invalid {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Encoding the renderer failed.
    #[error("failed to serialise renderer: {source}")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// A renderer that draws every graphic with the same symbol.
///
/// # Examples
/// ```
/// use geoint_core::{Renderer, Symbol};
///
/// # fn main() -> Result<(), geoint_core::RendererJsonError> {
/// let renderer = Renderer::from_json(
///     r#"{"type":"simple","symbol":{"type":"esriSLS","color":[255,0,0,255],"width":2}}"#,
/// )?;
/// assert!(matches!(renderer.symbol, Symbol::Line(_)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renderer {
    /// Symbol used for every graphic.
    pub symbol: Symbol,
    /// Legend label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Legend description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Renderer {
    /// Construct a renderer for a symbol.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            label: String::new(),
            description: String::new(),
        }
    }

    /// Decode a renderer from engine JSON text.
    ///
    /// # Errors
    /// Returns [`RendererJsonError`] when the text is not JSON, is not a
    /// simple renderer, or carries an invalid symbol.
    pub fn from_json(text: &str) -> Result<Self, RendererJsonError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| RendererJsonError::Parse { source })?;
        Self::from_json_value(value)
    }

    /// Decode a renderer from an already parsed JSON value.
    ///
    /// # Errors
    /// See [`Renderer::from_json`].
    pub fn from_json_value(value: Value) -> Result<Self, RendererJsonError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(RendererJsonError::MissingType)?;
        if kind != SIMPLE_RENDERER_TYPE {
            return Err(RendererJsonError::Unsupported {
                kind: kind.to_owned(),
            });
        }
        serde_json::from_value(value).map_err(|source| RendererJsonError::Invalid { source })
    }

    /// Encode the renderer as an engine JSON value.
    ///
    /// # Errors
    /// Returns [`RendererJsonError::Serialise`] if `serde_json` rejects the
    /// value.
    pub fn to_json_value(&self) -> Result<Value, RendererJsonError> {
        let mut value =
            serde_json::to_value(self).map_err(|source| RendererJsonError::Serialise { source })?;
        if let Value::Object(members) = &mut value {
            members.insert("type".to_owned(), Value::from(SIMPLE_RENDERER_TYPE));
        }
        Ok(value)
    }

    /// Encode the renderer as compact engine JSON text.
    ///
    /// # Errors
    /// See [`Renderer::to_json_value`].
    pub fn to_json(&self) -> Result<String, RendererJsonError> {
        self.to_json_value().map(|value| value.to_string())
    }
}
