use crate::core::models::atom::{AtomRecord, SecondaryStructure};
use crate::core::models::structure::{StructureKind, StructureRecord};
use crate::engine::context::CompileContext;
use tracing::{debug, info, instrument};

/// An open helix or sheet run.
struct OpenRun<'a> {
    kind: StructureKind,
    chain: &'a str,
    start_residue: &'a str,
    start_name: &'a str,
}

/// Running state of the encoder.
///
/// Counters start at 1 and are shared by every chain of the structure.
struct Encoder<'a> {
    state: SecondaryStructure,
    open: Option<OpenRun<'a>>,
    last_residue: &'a str,
    last_name: &'a str,
    helix_count: usize,
    sheet_count: usize,
    records: Vec<StructureRecord>,
}

impl<'a> Encoder<'a> {
    fn new() -> Self {
        Self {
            state: SecondaryStructure::Loop,
            open: None,
            last_residue: "",
            last_name: "",
            helix_count: 1,
            sheet_count: 1,
            records: Vec::new(),
        }
    }

    fn close_run(&mut self) {
        let Some(run) = self.open.take() else {
            return;
        };
        let counter = match run.kind {
            StructureKind::Helix => &mut self.helix_count,
            StructureKind::Sheet => &mut self.sheet_count,
        };
        self.records.push(StructureRecord {
            kind: run.kind,
            serial: *counter,
            start_residue: run.start_residue.to_string(),
            start_name: run.start_name.to_string(),
            end_residue: self.last_residue.to_string(),
            end_name: self.last_name.to_string(),
            chain: run.chain.to_string(),
            class: run.kind.default_class(),
        });
        *counter += 1;
    }

    fn step(&mut self, atom: &'a AtomRecord) {
        let code = atom.secondary_structure;
        if code != self.state {
            self.close_run();
            let kind = match code {
                SecondaryStructure::Helix => Some(StructureKind::Helix),
                SecondaryStructure::Sheet => Some(StructureKind::Sheet),
                SecondaryStructure::Loop => None,
            };
            self.open = kind.map(|kind| OpenRun {
                kind,
                chain: &atom.chain,
                start_residue: &atom.residue_id,
                start_name: &atom.residue_name,
            });
            self.state = code;
        }
        self.last_residue = &atom.residue_id;
        self.last_name = &atom.residue_name;
    }

    fn finish(mut self) -> Vec<StructureRecord> {
        self.close_run();
        self.records
    }
}

/// Run-length encodes the per-residue secondary structure into HELIX and SHEET records.
///
/// Only alpha carbons are read, one per residue, in input order. A run ends
/// whenever the structure code changes; a run that crosses a chain boundary
/// without a code change keeps the chain it started in.
pub fn encode(atoms: &[AtomRecord]) -> Vec<StructureRecord> {
    let mut encoder = Encoder::new();
    for atom in atoms.iter().filter(|atom| atom.is_alpha_carbon()) {
        encoder.step(atom);
    }
    encoder.finish()
}

/// Renders records as PDB header lines, one per record.
pub fn to_pdb_lines(records: &[StructureRecord]) -> Vec<String> {
    records.iter().map(|record| record.to_string()).collect()
}

#[instrument(skip_all, name = "secondary_structure_task")]
pub fn run(atoms: &[AtomRecord], context: &CompileContext) -> Vec<StructureRecord> {
    context.reporter.message("Encoding secondary structure...");
    let records = encode(atoms);

    let helices = records
        .iter()
        .filter(|r| r.kind == StructureKind::Helix)
        .count();
    debug!(helices, sheets = records.len() - helices, "Structure runs closed.");
    info!(records = records.len(), "Secondary structure encoded.");
    records
}
