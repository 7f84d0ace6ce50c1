use crate::core::utils::identifiers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cartoon sub-mode value the graphics engine uses for putty cartoons.
pub const PUTTY_CARTOON_MODE: i32 = 7;

/// Distinguishes standard polymer atoms from heteroatoms.
///
/// The graphics engine stores a handful of representation channels twice for
/// heteroatoms, so the decoder needs to know which kind of record it is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AtomKind {
    /// A standard polymer atom (`ATOM` record).
    #[default]
    #[serde(rename = "ATOM")]
    Atom,
    /// A heteroatom such as a ligand, ion or water (`HETATM` record).
    #[serde(rename = "HETATM")]
    Hetatm,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid atom kind '{0}', expected ATOM or HETATM")]
pub struct ParseAtomKindError(pub String);

impl FromStr for AtomKind {
    type Err = ParseAtomKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ATOM" => Ok(AtomKind::Atom),
            "HETATM" => Ok(AtomKind::Hetatm),
            _ => Err(ParseAtomKindError(s.to_string())),
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomKind::Atom => write!(f, "ATOM"),
            AtomKind::Hetatm => write!(f, "HETATM"),
        }
    }
}

/// Per-residue secondary-structure assignment as reported by the graphics engine.
///
/// Only helices and sheets produce structure records; every other code
/// (including an empty one) is treated as loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SecondaryStructure {
    /// Helix (`H`).
    #[serde(rename = "H")]
    Helix,
    /// Beta strand / sheet (`S`).
    #[serde(rename = "S")]
    Sheet,
    /// Loop or unassigned (`L`).
    #[default]
    #[serde(rename = "L")]
    Loop,
}

impl SecondaryStructure {
    /// Interprets a single secondary-structure code. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "H" => SecondaryStructure::Helix,
            "S" => SecondaryStructure::Sheet,
            _ => SecondaryStructure::Loop,
        }
    }

    /// Returns the one-letter code of this assignment.
    pub fn code(&self) -> char {
        match self {
            SecondaryStructure::Helix => 'H',
            SecondaryStructure::Sheet => 'S',
            SecondaryStructure::Loop => 'L',
        }
    }
}

/// One atom of the scene, exactly as the graphics engine reports it.
///
/// Records are produced once per compilation pass and never mutated by the
/// compilation tasks. Residue ids are kept as strings because the engine may
/// report insertion codes (e.g. `"12A"`); tasks that need numeric adjacency
/// parse them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// Unique atom serial.
    pub id: i64,
    /// Chain identifier. Upstream normalization guarantees it is non-empty.
    pub chain: String,
    /// Residue sequence id, numeric with an optional insertion suffix.
    pub residue_id: String,
    /// Three-letter residue name (e.g. "ALA", "HOH").
    pub residue_name: String,
    /// Atom name (e.g. "CA", "OG1").
    pub atom_name: String,
    /// Element symbol (e.g. "C", "N", "FE").
    pub element: String,
    /// Packed representation bits, see [`super::representation::RepresentationFlags`].
    pub flag_bitmask: u32,
    /// Index into the color palette.
    pub color_id: i32,
    /// Secondary-structure assignment of the residue this atom belongs to.
    #[serde(default)]
    pub secondary_structure: SecondaryStructure,
    /// Whether this is a standard atom or a heteroatom.
    #[serde(default)]
    pub kind: AtomKind,
    /// Cartoon sub-mode indicator; [`PUTTY_CARTOON_MODE`] marks putty cartoons.
    #[serde(default)]
    pub cartoon_mode: i32,
    /// Free-text label shown when the label channel is active.
    #[serde(default)]
    pub label: String,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` with no representation bits set.
    ///
    /// The color id defaults to `0`, the secondary structure to loop, the kind to
    /// [`AtomKind::Atom`] and the label to an empty string. The remaining public
    /// fields can be adjusted afterwards.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique atom serial.
    /// * `chain` - The chain identifier.
    /// * `residue_id` - The residue sequence id.
    /// * `residue_name` - The three-letter residue name.
    /// * `atom_name` - The atom name.
    /// * `element` - The element symbol.
    pub fn new(
        id: i64,
        chain: &str,
        residue_id: &str,
        residue_name: &str,
        atom_name: &str,
        element: &str,
    ) -> Self {
        Self {
            id,
            chain: chain.to_string(),
            residue_id: residue_id.to_string(),
            residue_name: residue_name.to_string(),
            atom_name: atom_name.to_string(),
            element: element.to_string(),
            flag_bitmask: 0,
            color_id: 0,
            secondary_structure: SecondaryStructure::default(),
            kind: AtomKind::default(),
            cartoon_mode: 0,
            label: String::new(),
        }
    }

    pub fn is_hetero(&self) -> bool {
        self.kind == AtomKind::Hetatm
    }

    pub fn is_carbon(&self) -> bool {
        identifiers::is_carbon(&self.element)
    }

    pub fn is_alpha_carbon(&self) -> bool {
        identifiers::is_alpha_carbon(&self.atom_name)
    }

    /// Key used for residue-level color overrides: chain id immediately followed by residue id.
    pub fn residue_key(&self) -> String {
        format!("{}{}", self.chain, self.residue_id)
    }

    /// Key used for the label map: `"{residue_id}:{chain}.{atom_name}"`.
    pub fn label_key(&self) -> String {
        format!("{}:{}.{}", self.residue_id, self.chain, self.atom_name)
    }
}
