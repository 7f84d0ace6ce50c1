use super::builtin::BUILTIN_COLORS;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Index bits marking a color stored inline as `0x40RRGGBB` rather than by table entry.
const DIRECT_RGB_BITS: u32 = 0x4000_0000;
const DIRECT_RGB_MASK: u32 = 0xC000_0000;

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorItem {
    pub name: String,
    pub index: i32,
    /// Components in `0.0..=1.0`.
    pub rgb: [f64; 3],
    /// `0xRRGGBB`, each channel truncated from `component * 255`.
    pub hex: String,
}

impl ColorItem {
    pub fn new(name: &str, index: i32, rgb: [f64; 3]) -> Self {
        Self {
            name: name.to_string(),
            index,
            rgb,
            hex: hex_from_rgb(rgb),
        }
    }

    /// Decodes an inline `0x40RRGGBB` color index. Returns `None` for table indices.
    pub fn from_direct_rgb(index: i32) -> Option<Self> {
        let bits = index as u32;
        if bits & DIRECT_RGB_MASK != DIRECT_RGB_BITS {
            return None;
        }
        let [_, r, g, b] = bits.to_be_bytes();
        let hex = format!("0x{:02x}{:02x}{:02x}", r, g, b);
        Some(Self {
            name: hex.clone(),
            index,
            rgb: [r, g, b].map(|c| f64::from(c) / 255.0),
            hex,
        })
    }
}

pub fn hex_from_rgb(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|c| (c * 255.0) as u8);
    format!("0x{:02x}{:02x}{:02x}", r, g, b)
}

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Color '{name}' has component {value} outside 0..=1")]
    InvalidComponent { name: String, value: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    color: Vec<PaletteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteEntry {
    name: String,
    index: i32,
    rgb: [f64; 3],
}

/// Lookup table from color index to [`ColorItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    colors: BTreeMap<i32, ColorItem>,
}

impl ColorSwatch {
    /// A swatch preloaded with the engine's named colors.
    pub fn builtin() -> Self {
        let colors = BUILTIN_COLORS
            .entries()
            .map(|(&index, color)| (index, ColorItem::new(color.name, index, color.rgb)))
            .collect();
        Self { colors }
    }

    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Table entry for `index`. Inline RGB indices are not table entries; see [`ColorSwatch::lookup`].
    pub fn get(&self, index: i32) -> Option<&ColorItem> {
        self.colors.get(&index)
    }

    /// Resolves `index` through the table, falling back to inline `0x40RRGGBB` decoding.
    pub fn lookup(&self, index: i32) -> Option<Cow<'_, ColorItem>> {
        match self.colors.get(&index) {
            Some(item) => Some(Cow::Borrowed(item)),
            None => ColorItem::from_direct_rgb(index).map(Cow::Owned),
        }
    }

    /// First color with `name` in index order.
    pub fn by_name(&self, name: &str) -> Option<&ColorItem> {
        self.colors.values().find(|item| item.name == name)
    }

    /// Adds or replaces a color, returning the entry it replaced.
    pub fn insert(&mut self, item: ColorItem) -> Option<ColorItem> {
        self.colors.insert(item.index, item)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorItem> {
        self.colors.values()
    }

    /// Merges the `[[color]]` entries of a TOML palette file into this swatch.
    ///
    /// Entries sharing an index with an existing color replace it. Returns the
    /// number of entries read.
    pub fn extend_from_path(&mut self, path: &Path) -> Result<usize, PaletteLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: PaletteFile = toml::from_str(&content).map_err(|e| PaletteLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        for entry in &file.color {
            if let Some(&value) = entry.rgb.iter().find(|c| !(0.0..=1.0).contains(*c)) {
                return Err(PaletteLoadError::InvalidComponent {
                    name: entry.name.clone(),
                    value,
                });
            }
        }

        let count = file.color.len();
        for entry in file.color {
            self.insert(ColorItem::new(&entry.name, entry.index, entry.rgb));
        }
        Ok(count)
    }
}

impl Default for ColorSwatch {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_swatch_has_every_engine_color() {
        let swatch = ColorSwatch::builtin();
        assert_eq!(swatch.len(), 178);
        assert_eq!(swatch.get(0).unwrap().name, "white");
        assert_eq!(swatch.get(5387).unwrap().name, "pseudoatom");
        assert!(swatch.get(38).is_none());
    }

    #[test]
    fn hex_truncates_each_component() {
        let swatch = ColorSwatch::builtin();
        assert_eq!(swatch.get(4).unwrap().hex, "0xff0000");
        assert_eq!(swatch.get(26).unwrap().hex, "0x33ff33");
        assert_eq!(swatch.get(9).unwrap().hex, "0xff9999");
        assert_eq!(hex_from_rgb([0.5, 0.5, 0.5]), "0x7f7f7f");
    }

    #[test]
    fn lookup_decodes_inline_rgb_indices() {
        let swatch = ColorSwatch::builtin();
        let orange = swatch.lookup(0x40ff_8000).unwrap();
        assert_eq!(orange.hex, "0xff8000");
        assert_eq!(orange.index, 0x40ff_8000);
        assert!((orange.rgb[1] - 128.0 / 255.0).abs() < 1e-12);
        assert!(swatch.get(0x40ff_8000).is_none());

        assert_eq!(swatch.lookup(4).unwrap().name, "red");
        assert!(swatch.lookup(38).is_none());
        assert!(swatch.lookup(-1).is_none());
        assert!(ColorItem::from_direct_rgb(0x00ff_8000).is_none());
    }

    #[test]
    fn by_name_returns_lowest_index_for_duplicate_names() {
        let swatch = ColorSwatch::builtin();
        assert_eq!(swatch.by_name("deepsalmon").unwrap().index, 5258);
        assert_eq!(swatch.by_name("tv_red").unwrap().index, 32);
        assert!(swatch.by_name("no-such-color").is_none());
    }

    #[test]
    fn insert_replaces_existing_index() {
        let mut swatch = ColorSwatch::empty();
        assert!(swatch.is_empty());
        assert!(swatch.insert(ColorItem::new("a", 1, [0.0; 3])).is_none());
        let old = swatch.insert(ColorItem::new("b", 1, [1.0; 3])).unwrap();
        assert_eq!(old.name, "a");
        assert_eq!(swatch.get(1).unwrap().hex, "0xffffff");
    }

    #[test]
    fn extend_from_path_adds_and_overrides_colors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.toml");
        fs::write(
            &path,
            r#"
            [[color]]
            name = "session_teal"
            index = 9001
            rgb = [0.0, 0.5, 0.5]

            [[color]]
            name = "white"
            index = 0
            rgb = [0.9, 0.9, 0.9]
            "#,
        )
        .unwrap();

        let mut swatch = ColorSwatch::builtin();
        assert_eq!(swatch.extend_from_path(&path).unwrap(), 2);
        assert_eq!(swatch.len(), 179);
        assert_eq!(swatch.get(9001).unwrap().hex, "0x007f7f");
        assert_eq!(swatch.get(0).unwrap().hex, "0xe5e5e5");
    }

    #[test]
    fn extend_from_path_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let mut swatch = ColorSwatch::builtin();
        let result = swatch.extend_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(PaletteLoadError::Io { .. })));
    }

    #[test]
    fn extend_from_path_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not toml").unwrap();
        let mut swatch = ColorSwatch::builtin();
        let result = swatch.extend_from_path(&path);
        assert!(matches!(result, Err(PaletteLoadError::Toml { .. })));
    }

    #[test]
    fn extend_from_path_rejects_out_of_range_components_without_partial_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("range.toml");
        fs::write(
            &path,
            r#"
            [[color]]
            name = "ok"
            index = 7000
            rgb = [0.1, 0.2, 0.3]

            [[color]]
            name = "bright"
            index = 7001
            rgb = [1.0, 2.0, 0.0]
            "#,
        )
        .unwrap();
        let mut swatch = ColorSwatch::builtin();
        let result = swatch.extend_from_path(&path);
        assert!(matches!(
            result,
            Err(PaletteLoadError::InvalidComponent { ref name, .. }) if name == "bright"
        ));
        assert!(swatch.get(7000).is_none());
    }
}
