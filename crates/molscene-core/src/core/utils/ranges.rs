/// Collapses residue numbers into ascending runs of consecutive integers.
///
/// Input order and duplicates do not matter. Each run is returned as an
/// inclusive `(start, end)` pair; a lone residue has `start == end`.
pub fn collapse_residue_ranges(residues: &[i64]) -> Vec<(i64, i64)> {
    let mut sorted = residues.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs: Vec<(i64, i64)> = Vec::new();
    for residue in sorted {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == residue => *end = residue,
            _ => runs.push((residue, residue)),
        }
    }
    runs
}
