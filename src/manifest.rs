//! `icons.json` data model
//!
//! Mirrors the `icons` member of a browser extension manifest, mapping each
//! pixel size to the file drawn for it, so the generated fragment can be
//! pasted straight into `manifest.json`.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::path::Path;

/// Root structure of the manifest fragment.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    pub icons: IconSet,
}

/// Size to icon path, relative to the output directory.
///
/// Serialized as a JSON object keyed by the size in ascending numeric order;
/// a string-keyed map would put "128" before "16".
#[derive(Debug, Clone, Default)]
pub struct IconSet(Vec<(u32, String)>);

impl IconSet {
    #[cfg(test)]
    pub fn entries(&self) -> &[(u32, String)] {
        &self.0
    }
}

impl Serialize for IconSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(size, file)| (size.to_string(), file)))
    }
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the icon for `size`, keeping entries sorted.
    pub fn add_icon(&mut self, size: u32, filename: String) {
        let entries = &mut self.icons.0;
        match entries.binary_search_by_key(&size, |(s, _)| *s) {
            Ok(i) => entries[i].1 = filename,
            Err(i) => entries.insert(i, (size, filename)),
        }
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize icons.json")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted_numerically() {
        let mut manifest = IconManifest::new();
        manifest.add_icon(128, "icon128.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());
        manifest.add_icon(48, "icon48.png".to_string());

        let sizes: Vec<u32> = manifest.icons.entries().iter().map(|(s, _)| *s).collect();
        assert_eq!(sizes, vec![16, 48, 128]);
    }

    #[test]
    fn test_add_icon_replaces_existing_size() {
        let mut manifest = IconManifest::new();
        manifest.add_icon(16, "old.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());

        assert_eq!(manifest.icons.entries(), &[(16, "icon16.png".to_string())]);
    }

    #[test]
    fn test_json_shape_and_order() {
        let mut manifest = IconManifest::new();
        manifest.add_icon(128, "icon128.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());

        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["icons"]["16"], "icon16.png");
        assert_eq!(parsed["icons"]["128"], "icon128.png");
        assert!(json.find("\"16\"").unwrap() < json.find("\"128\"").unwrap());
    }
}
