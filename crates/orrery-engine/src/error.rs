//! Error types for the orrery engine.
//!
//! Only initialization is fallible. Per-frame work never returns an error;
//! recoverable problems (a texture that fails to load, say) degrade visuals
//! and are logged instead.

use thiserror::Error;

use crate::api::types::NodeId;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, OrreryError>;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Shown to the user as-is by the host page.
    #[error("Your browser cannot display this scene: {reason}")]
    UnsupportedContext { reason: String },

    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),

    #[error("node {child:?} already has parent {parent:?}")]
    AlreadyParented { child: NodeId, parent: NodeId },

    #[error("invalid scroll span '{name}': [{start}, {end})")]
    InvalidSpan { name: String, start: f32, end: f32 },

    #[error("unknown texture '{0}'")]
    UnknownTexture(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_context_message_is_user_facing() {
        let err = OrreryError::UnsupportedContext { reason: "no WebGL2".into() };
        assert_eq!(err.to_string(), "Your browser cannot display this scene: no WebGL2");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("nope");
        let err: OrreryError = parse.unwrap_err().into();
        assert!(matches!(err, OrreryError::Json(_)));
    }
}
