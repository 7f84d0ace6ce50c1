use super::atom::AtomRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// The layer a resolved color came from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLayer {
    /// Per-atom exception keyed by atom serial.
    Serial,
    /// Carbon override for a whole residue.
    Residue,
    /// Default carbon color of a chain.
    Chain,
    /// Default color of a non-carbon element.
    Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor<'a> {
    pub layer: ColorLayer,
    pub hex: &'a str,
}

/// A reduced, four-layer color description of a scene.
///
/// Carbons are colored per chain with optional per-residue overrides; every other
/// element gets one default color. Atoms that do not fit those layers carry a
/// per-serial exception.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColorMap {
    /// Element symbol to hex color, non-carbon atoms only.
    pub elemental: BTreeMap<String, String>,
    /// Chain id to the default hex color of its carbons.
    pub chain: BTreeMap<String, String>,
    /// Chain id followed by residue id (e.g. `"A12"`) to hex color, carbons only.
    pub residue: BTreeMap<String, String>,
    /// Atom serial to hex color.
    pub serial: BTreeMap<i64, String>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elemental.is_empty()
            && self.chain.is_empty()
            && self.residue.is_empty()
            && self.serial.is_empty()
    }

    /// Resolves the color of `atom` walking serial, residue, chain and element layers in order.
    pub fn resolve(&self, atom: &AtomRecord) -> Option<ResolvedColor<'_>> {
        let carbon = atom.is_carbon();
        let residue_key = atom.residue_key();
        let layers = [
            (ColorLayer::Serial, self.serial.get(&atom.id)),
            (
                ColorLayer::Residue,
                carbon.then(|| self.residue.get(&residue_key)).flatten(),
            ),
            (
                ColorLayer::Chain,
                carbon.then(|| self.chain.get(&atom.chain)).flatten(),
            ),
            (
                ColorLayer::Element,
                (!carbon).then(|| self.elemental.get(&atom.element)).flatten(),
            ),
        ];
        layers.into_iter().find_map(|(layer, hex)| {
            hex.map(|hex| ResolvedColor {
                layer,
                hex: hex.as_str(),
            })
        })
    }

    /// Flattens the layers into a direct atom serial to hex lookup for `atoms`.
    ///
    /// Atoms that do not resolve are left out.
    pub fn flatten(&self, atoms: &[AtomRecord]) -> BTreeMap<i64, String> {
        atoms
            .iter()
            .filter_map(|atom| {
                self.resolve(atom)
                    .map(|resolved| (atom.id, resolved.hex.to_string()))
            })
            .collect()
    }
}
