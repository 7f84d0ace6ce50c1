use crate::core::utils::identifiers;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StructureKind {
    Helix,
    Sheet,
}

impl StructureKind {
    /// Class code written into the record: 1 (right-handed alpha) for helices, 0 for sheets.
    pub fn default_class(&self) -> u8 {
        match self {
            StructureKind::Helix => 1,
            StructureKind::Sheet => 0,
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Helix => write!(f, "HELIX"),
            StructureKind::Sheet => write!(f, "SHEET"),
        }
    }
}

/// One contiguous helix or sheet span.
///
/// Rendered with [`fmt::Display`] as a fixed-column PDB `HELIX` or `SHEET` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureRecord {
    pub kind: StructureKind,
    /// Sequential id, counted separately for helices and sheets.
    pub serial: usize,
    pub start_residue: String,
    pub start_name: String,
    pub end_residue: String,
    pub end_name: String,
    pub chain: String,
    pub class: u8,
}

impl StructureRecord {
    /// Numeric span `end - start` using the leading integer of each residue id.
    ///
    /// Ids without a leading integer count as zero.
    pub fn length(&self) -> i64 {
        let start = identifiers::leading_residue_number(&self.start_residue).unwrap_or(0);
        let end = identifiers::leading_residue_number(&self.end_residue).unwrap_or(0);
        end - start
    }
}

impl fmt::Display for StructureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StructureKind::Helix => write!(
                f,
                "HELIX  {serial:>3} {serial:>3} {start_name} {chain} {start:>4}  {end_name} {chain} {end:>4} {class:>2}                                  {length:>2}",
                serial = self.serial,
                start_name = self.start_name,
                chain = self.chain,
                start = self.start_residue,
                end_name = self.end_name,
                end = self.end_residue,
                class = self.class,
                length = self.length(),
            ),
            StructureKind::Sheet => write!(
                f,
                "SHEET  {serial:>3} {serial:>2}S 1 {start_name} {chain}{start:>4}  {end_name} {chain}{end:>4}  0",
                serial = self.serial,
                start_name = self.start_name,
                chain = self.chain,
                start = self.start_residue,
                end_name = self.end_name,
                end = self.end_residue,
            ),
        }
    }
}
