use crate::core::models::atom::AtomRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{info, instrument};

/// Chain coverage summary of a structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StructureDescription {
    /// `"{first}-{last}:{chain}"` per polymer chain, in first-seen chain order.
    pub peptide: Vec<String>,
    /// `"{residue_name} and :{chain}"` per distinct heteroatom residue name and chain.
    pub hetero: Vec<String>,
}

fn plain_residue_number(residue_id: &str) -> Option<i64> {
    if residue_id.is_empty() || !residue_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    residue_id.parse().ok()
}

/// Summarizes the residue span of every polymer chain and the heteroatom groups.
///
/// Polymer residues whose id is not all digits (insertion codes, negative
/// numbering) are skipped.
pub fn describe(atoms: &[AtomRecord]) -> StructureDescription {
    let mut chain_order: Vec<&str> = Vec::new();
    let mut spans: HashMap<&str, (i64, i64)> = HashMap::new();
    let mut seen_hetero: HashSet<(&str, &str)> = HashSet::new();
    let mut hetero = Vec::new();

    for atom in atoms {
        if atom.is_hetero() {
            let key = (atom.residue_name.as_str(), atom.chain.as_str());
            if seen_hetero.insert(key) {
                hetero.push(format!("{} and :{}", atom.residue_name, atom.chain));
            }
            continue;
        }
        let Some(number) = plain_residue_number(&atom.residue_id) else {
            continue;
        };
        spans
            .entry(atom.chain.as_str())
            .and_modify(|(first, last)| {
                *first = (*first).min(number);
                *last = (*last).max(number);
            })
            .or_insert_with(|| {
                chain_order.push(atom.chain.as_str());
                (number, number)
            });
    }

    let peptide = chain_order
        .iter()
        .filter_map(|chain| {
            spans
                .get(chain)
                .map(|(first, last)| format!("{}-{}:{}", first, last, chain))
        })
        .collect();

    StructureDescription { peptide, hetero }
}

#[instrument(skip_all, name = "describe_task")]
pub fn run(atoms: &[AtomRecord]) -> StructureDescription {
    let description = describe(atoms);
    info!(
        chains = description.peptide.len(),
        hetero_groups = description.hetero.len(),
        "Structure description generated."
    );
    description
}
