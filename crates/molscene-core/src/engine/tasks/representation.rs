use crate::core::models::atom::{AtomRecord, PUTTY_CARTOON_MODE};
use crate::core::models::representation::{Channel, RepresentationFlags, RepresentationSet};
use crate::engine::context::CompileContext;
use crate::engine::error::{EngineError, InputError};
use crate::engine::progress::Progress;
use crate::engine::selection;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DecodedRepresentations {
    pub channels: RepresentationSet,
    /// Label text keyed by `"{residue_id}:{chain}.{atom_name}"`.
    pub labels: BTreeMap<String, String>,
}

/// Representation bits of one atom with the heteroatom aliases folded in.
pub fn effective_flags(atom: &AtomRecord) -> RepresentationFlags {
    let flags = RepresentationFlags::from_bitmask(atom.flag_bitmask);
    if atom.is_hetero() {
        flags.with_hetero_aliases()
    } else {
        flags
    }
}

/// Residues drawn as putty: those whose alpha carbon carries the putty cartoon mode.
fn putty_residues(atoms: &[AtomRecord]) -> HashSet<(&str, &str)> {
    atoms
        .iter()
        .filter(|atom| atom.is_alpha_carbon() && atom.cartoon_mode == PUTTY_CARTOON_MODE)
        .map(|atom| (atom.chain.as_str(), atom.residue_id.as_str()))
        .collect()
}

#[instrument(skip_all, name = "representation_task")]
pub fn run(
    atoms: &[AtomRecord],
    context: &CompileContext,
) -> Result<DecodedRepresentations, EngineError> {
    info!(atoms = atoms.len(), "Decoding representation flags.");

    if let Some(atom) = atoms.iter().find(|atom| atom.chain.trim().is_empty()) {
        return Err(InputError::MissingChain { atom_id: atom.id }.into());
    }

    let flags: Vec<RepresentationFlags> = atoms.iter().map(effective_flags).collect();

    let labels: BTreeMap<String, String> = atoms
        .iter()
        .zip(&flags)
        .filter(|(_, f)| f.contains(RepresentationFlags::LABEL))
        .map(|(atom, _)| (atom.label_key(), atom.label.clone()))
        .collect();

    let putty = putty_residues(atoms);
    if !putty.is_empty() {
        debug!(residues = putty.len(), "Putty override applies.");
    }
    let in_putty =
        |atom: &AtomRecord| putty.contains(&(atom.chain.as_str(), atom.residue_id.as_str()));

    context.reporter.report(Progress::TaskStart {
        total_steps: Channel::ALL.len() as u64,
    });

    let mut channels = RepresentationSet::new();
    for channel in Channel::ALL {
        let channel_flags: Vec<bool> = atoms
            .iter()
            .zip(&flags)
            .map(|(atom, f)| match channel {
                Channel::Putty => in_putty(atom),
                Channel::Cartoon => f.contains(RepresentationFlags::CARTOON) && !in_putty(atom),
                _ => channel.flag().is_some_and(|bit| f.contains(bit)),
            })
            .collect();
        let selections = selection::compress_flagged(atoms, &channel_flags)?;
        debug!(channel = %channel, expressions = selections.len(), "Channel compressed.");
        channels.insert(channel, selections);
        context.reporter.report(Progress::TaskIncrement);
    }

    context.reporter.report(Progress::TaskFinish);
    info!(labels = labels.len(), "Representations decoded.");

    Ok(DecodedRepresentations { channels, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomKind;
    use crate::engine::config::TranspileConfig;
    use crate::engine::progress::ProgressReporter;

    fn atom(id: i64, chain: &str, resi: &str, name: &str, bits: RepresentationFlags) -> AtomRecord {
        let mut atom = AtomRecord::new(id, chain, resi, "ALA", name, &name[..1]);
        atom.flag_bitmask = bits.bits();
        atom
    }

    fn decode(atoms: &[AtomRecord]) -> Result<DecodedRepresentations, EngineError> {
        let config = TranspileConfig::default();
        let reporter = ProgressReporter::new();
        run(atoms, &CompileContext::new(&config, &reporter))
    }

    fn channel(decoded: &DecodedRepresentations, channel: Channel) -> Vec<String> {
        decoded.channels.get(channel).unwrap().to_strings()
    }

    #[test]
    fn every_channel_is_present_in_order() {
        let decoded = decode(&[atom(1, "A", "1", "CA", RepresentationFlags::empty())]).unwrap();
        let order: Vec<_> = decoded.channels.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Channel::ALL.to_vec());
        assert!(decoded.channels.iter().all(|(_, s)| s.is_empty()));
    }

    #[test]
    fn bits_route_to_their_channels() {
        let atoms = vec![
            atom(1, "A", "1", "N", RepresentationFlags::CARTOON | RepresentationFlags::STICKS),
            atom(2, "A", "1", "CA", RepresentationFlags::CARTOON),
            atom(3, "A", "2", "CA", RepresentationFlags::CARTOON | RepresentationFlags::SURFACE),
        ];
        let decoded = decode(&atoms).unwrap();
        assert_eq!(channel(&decoded, Channel::Cartoon), vec!["*"]);
        assert_eq!(channel(&decoded, Channel::Sticks), vec!["1:A.N"]);
        assert_eq!(channel(&decoded, Channel::Surface), vec!["2:A"]);
        assert!(channel(&decoded, Channel::Lines).is_empty());
    }

    #[test]
    fn hetero_aliases_count_only_for_heteroatoms() {
        let mut ligand = atom(1, "B", "100", "O1", RepresentationFlags::NONBONDED_SPHERES);
        ligand.kind = AtomKind::Hetatm;
        let mut water = atom(2, "B", "101", "O", RepresentationFlags::NONBONDED);
        water.kind = AtomKind::Hetatm;
        let protein = atom(3, "A", "1", "CA", RepresentationFlags::NONBONDED);

        let decoded = decode(&[ligand, water, protein]).unwrap();
        assert_eq!(channel(&decoded, Channel::Spheres), vec!["100:B"]);
        assert_eq!(channel(&decoded, Channel::Lines), vec!["101:B"]);
    }

    #[test]
    fn labels_are_collected_separately() {
        let mut labelled = atom(1, "A", "5", "CA", RepresentationFlags::LABEL);
        labelled.label = "Lys5".to_string();
        let mut hidden = atom(2, "A", "6", "CA", RepresentationFlags::empty());
        hidden.label = "unused".to_string();

        let decoded = decode(&[labelled, hidden]).unwrap();
        assert_eq!(decoded.labels.len(), 1);
        assert_eq!(decoded.labels["5:A.CA"], "Lys5");
        assert!(decoded.channels.get(Channel::Sticks).unwrap().is_empty());
    }

    #[test]
    fn putty_overrides_cartoon_for_the_whole_residue() {
        let mut atoms = vec![
            atom(1, "A", "1", "N", RepresentationFlags::CARTOON),
            atom(2, "A", "1", "CA", RepresentationFlags::CARTOON),
            atom(3, "A", "2", "N", RepresentationFlags::CARTOON),
            atom(4, "A", "2", "CA", RepresentationFlags::CARTOON),
        ];
        atoms[1].cartoon_mode = PUTTY_CARTOON_MODE;

        let decoded = decode(&atoms).unwrap();
        assert_eq!(channel(&decoded, Channel::Putty), vec!["1:A"]);
        assert_eq!(channel(&decoded, Channel::Cartoon), vec!["2:A"]);
    }

    #[test]
    fn putty_mode_on_non_alpha_carbon_is_ignored() {
        let mut atoms = vec![
            atom(1, "A", "1", "N", RepresentationFlags::CARTOON),
            atom(2, "A", "1", "CA", RepresentationFlags::CARTOON),
        ];
        atoms[0].cartoon_mode = PUTTY_CARTOON_MODE;
        let decoded = decode(&atoms).unwrap();
        assert!(channel(&decoded, Channel::Putty).is_empty());
        assert_eq!(channel(&decoded, Channel::Cartoon), vec!["*"]);
    }

    #[test]
    fn missing_chain_fails_fast() {
        let atoms = vec![atom(9, " ", "1", "CA", RepresentationFlags::STICKS)];
        assert_eq!(
            decode(&atoms),
            Err(EngineError::Input(InputError::MissingChain { atom_id: 9 }))
        );
    }

    #[test]
    fn empty_input_yields_empty_channels() {
        let decoded = decode(&[]).unwrap();
        assert_eq!(decoded.channels.len(), Channel::ALL.len());
        assert!(decoded.channels.iter().all(|(_, s)| s.is_empty()));
        assert!(decoded.labels.is_empty());
    }
}
