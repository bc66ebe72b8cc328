use std::collections::HashMap;
use log::{info, warn};
use serde::Serialize;
use crate::assets::manifest::TextureManifest;
use crate::components::mesh::{Material, Rgb};
use crate::error::{OrreryError, Result};

/// Texture slot index shared with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Load state of one texture slot. Only the host decodes and uploads;
/// Rust tracks whether the slot can be sampled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
struct TextureSlot {
    name: String,
    path: String,
    fallback: Rgb,
    status: TextureStatus,
}

/// Slot description handed to the host so it knows what to fetch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HostTexture {
    pub slot: u32,
    pub name: String,
    pub path: String,
    pub background: bool,
}

/// Registry of named texture slots, built from a [`TextureManifest`].
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
    by_name: HashMap<String, TextureId>,
    background: Option<TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_name: HashMap::new(),
            background: None,
        }
    }

    /// Build a registry from a parsed manifest. Slots follow manifest name order.
    /// A background name missing from the textures table is logged and ignored.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut registry = Self::new();
        for (name, desc) in &manifest.textures {
            registry.register(name, &desc.path, Rgb::from(desc.fallback));
        }
        if let Some(bg) = &manifest.background {
            match registry.get(bg) {
                Some(id) => registry.background = Some(id),
                None => warn!("background texture '{bg}' is not in the manifest"),
            }
        }
        info!("texture registry: {} slots", registry.len());
        registry
    }

    /// Register a texture. Registering an existing name returns its slot unchanged.
    pub fn register(&mut self, name: &str, path: &str, fallback: Rgb) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TextureId(self.slots.len() as u32);
        self.slots.push(TextureSlot {
            name: name.to_string(),
            path: path.to_string(),
            fallback,
            status: TextureStatus::Pending,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a slot by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Look up a slot by name, failing with `UnknownTexture`.
    pub fn resolve(&self, name: &str) -> Result<TextureId> {
        self.get(name).ok_or_else(|| OrreryError::UnknownTexture(name.to_string()))
    }

    /// Material for a named texture. An unknown name degrades to an
    /// untextured material with `fallback` and a warning.
    pub fn material(&self, name: &str, fallback: Rgb) -> Material {
        match self.resolve(name) {
            Ok(id) => Material::textured(Some(id), self.fallback(id).unwrap_or(fallback)),
            Err(err) => {
                warn!("{err}; using flat color");
                Material::textured(None, fallback)
            }
        }
    }

    pub fn background(&self) -> Option<TextureId> {
        self.background
    }

    pub fn status(&self, id: TextureId) -> Option<TextureStatus> {
        self.slots.get(id.0 as usize).map(|s| s.status)
    }

    pub fn is_ready(&self, id: TextureId) -> bool {
        self.status(id) == Some(TextureStatus::Ready)
    }

    pub fn fallback(&self, id: TextureId) -> Option<Rgb> {
        self.slots.get(id.0 as usize).map(|s| s.fallback)
    }

    pub fn name(&self, id: TextureId) -> Option<&str> {
        self.slots.get(id.0 as usize).map(|s| s.name.as_str())
    }

    /// Host finished uploading a slot. Returns true if the status changed.
    pub fn mark_loaded(&mut self, id: TextureId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            warn!("texture_loaded for unknown slot {}", id.0);
            return false;
        };
        if slot.status == TextureStatus::Ready {
            return false;
        }
        slot.status = TextureStatus::Ready;
        true
    }

    /// Host failed to load a slot. Returns true if the status changed.
    pub fn mark_failed(&mut self, id: TextureId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            warn!("texture_failed for unknown slot {}", id.0);
            return false;
        };
        if slot.status == TextureStatus::Failed {
            return false;
        }
        warn!("texture '{}' ({}) failed to load; rendering fallback color", slot.name, slot.path);
        slot.status = TextureStatus::Failed;
        true
    }

    /// Slot list for the host loader.
    pub fn host_textures(&self) -> Vec<HostTexture> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| HostTexture {
                slot: i as u32,
                name: s.name.clone(),
                path: s.path.clone(),
                background: self.background == Some(TextureId(i as u32)),
            })
            .collect()
    }

    /// [`host_textures`](Self::host_textures) as a JSON array.
    pub fn to_host_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.host_textures())?)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
