use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::error::Result;

/// Texture manifest for a scene: named textures plus the background.
/// Loaded from JSON at startup.
///
/// Names are kept sorted so texture slots are assigned in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Name of the texture drawn behind the scene (e.g., "stars").
    #[serde(default)]
    pub background: Option<String>,
    /// Named texture lookup: name → path + fallback color.
    pub textures: BTreeMap<String, TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Path the host fetches (e.g., "/textures/2k_mars.jpg").
    pub path: String,
    /// Flat RGB color shown until the image is ready, or if it fails.
    #[serde(default = "default_fallback")]
    pub fallback: [f32; 3],
}

fn default_fallback() -> [f32; 3] {
    [0.6, 0.6, 0.8]
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_background() {
        let json = r#"{
            "background": "stars",
            "textures": {
                "stars": { "path": "/textures/2k_stars.jpg", "fallback": [0.0, 0.0, 0.02] },
                "mars": { "path": "/textures/2k_mars.jpg" }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.background.as_deref(), Some("stars"));
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["stars"].fallback, [0.0, 0.0, 0.02]);
        assert_eq!(manifest.textures["mars"].fallback, default_fallback());
    }

    #[test]
    fn names_iterate_sorted() {
        let json = r#"{
            "textures": {
                "venus": { "path": "v.jpg" },
                "earth": { "path": "e.jpg" }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        let names: Vec<&str> = manifest.textures.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["earth", "venus"]);
        assert!(manifest.background.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TextureManifest::from_json("{ \"textures\": 3 }").is_err());
    }
}
