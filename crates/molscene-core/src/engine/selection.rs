use super::error::InputError;
use crate::core::models::atom::AtomRecord;
use crate::core::models::selection::{SelectionExpression, SelectionSet};
use crate::core::utils::{identifiers, ranges};
use std::collections::HashMap;

struct ResidueGroup<'a> {
    residue_id: &'a str,
    /// `(atom_name, flagged)` in first-seen name order; a repeated name keeps the last flag.
    atoms: Vec<(&'a str, bool)>,
    atom_index: HashMap<&'a str, usize>,
}

struct ChainGroup<'a> {
    chain: &'a str,
    residues: Vec<ResidueGroup<'a>>,
    residue_index: HashMap<&'a str, usize>,
}

enum ResidueState {
    FullyOn,
    Heterogeneous,
    FullyOff,
}

impl<'a> ResidueGroup<'a> {
    fn set(&mut self, atom_name: &'a str, flag: bool) {
        match self.atom_index.get(atom_name).copied() {
            Some(i) => self.atoms[i].1 = flag,
            None => {
                self.atom_index.insert(atom_name, self.atoms.len());
                self.atoms.push((atom_name, flag));
            }
        }
    }

    fn state(&self) -> ResidueState {
        let flagged = self.atoms.iter().filter(|(_, on)| *on).count();
        if flagged == self.atoms.len() {
            ResidueState::FullyOn
        } else if flagged > 0 {
            ResidueState::Heterogeneous
        } else {
            ResidueState::FullyOff
        }
    }
}

/// Groups atoms chain → residue → atom, all in first-seen order.
fn group_atoms<'a>(
    atoms: &'a [AtomRecord],
    flags: &[bool],
) -> Result<Vec<ChainGroup<'a>>, InputError> {
    if atoms.len() != flags.len() {
        return Err(InputError::FlagCountMismatch {
            atoms: atoms.len(),
            flags: flags.len(),
        });
    }
    let mut chains: Vec<ChainGroup<'a>> = Vec::new();
    let mut chain_index: HashMap<&'a str, usize> = HashMap::new();

    for (atom, &flag) in atoms.iter().zip(flags) {
        if atom.chain.trim().is_empty() {
            return Err(InputError::MissingChain { atom_id: atom.id });
        }
        let ci = *chain_index.entry(atom.chain.as_str()).or_insert_with(|| {
            chains.push(ChainGroup {
                chain: atom.chain.as_str(),
                residues: Vec::new(),
                residue_index: HashMap::new(),
            });
            chains.len() - 1
        });
        let ChainGroup {
            residues,
            residue_index,
            ..
        } = &mut chains[ci];
        let ri = *residue_index
            .entry(atom.residue_id.as_str())
            .or_insert_with(|| {
                residues.push(ResidueGroup {
                    residue_id: atom.residue_id.as_str(),
                    atoms: Vec::new(),
                    atom_index: HashMap::new(),
                });
                residues.len() - 1
            });
        residues[ri].set(atom.atom_name.as_str(), flag);
    }
    Ok(chains)
}

/// Compresses a per-atom flag into the smallest selection set denoting exactly the flagged atoms.
///
/// `flag_of` is evaluated once per atom. See [`compress_flagged`] for the ordering rules.
pub fn compress(
    atoms: &[AtomRecord],
    flag_of: impl Fn(&AtomRecord) -> bool,
) -> Result<SelectionSet, InputError> {
    let flags: Vec<bool> = atoms.iter().map(flag_of).collect();
    compress_flagged(atoms, &flags)
}

/// Compresses precomputed flags, `flags[i]` belonging to `atoms[i]`.
///
/// Atoms are identified by chain, residue and name; when a name repeats inside a
/// residue (alternate locations) the last occurrence decides its flag. Residues are
/// fully on, heterogeneous or fully off. Heterogeneous residues emit one atom
/// expression per flagged atom name. A chain whose residues are all
/// fully on becomes `:chain`; any other chain emits the ranges of its fully-on
/// residues right after its atom expressions. Whole-chain expressions follow
/// every per-chain expression. When every chain is fully on, the set is just `*`.
///
/// # Errors
///
/// Returns [`InputError::FlagCountMismatch`] unless there is exactly one flag per
/// atom, [`InputError::MissingChain`] for an atom with an empty chain id, and
/// [`InputError::NonNumericResidue`] when a residue id that must be collapsed into
/// a range is not a plain integer.
pub fn compress_flagged(atoms: &[AtomRecord], flags: &[bool]) -> Result<SelectionSet, InputError> {
    let chains = group_atoms(atoms, flags)?;
    if chains.is_empty() {
        return Ok(SelectionSet::new());
    }

    let mut expressions = Vec::new();
    let mut whole_chains = Vec::new();

    for group in &chains {
        let mut fully_on = Vec::new();
        let mut chain_is_full = true;

        for residue in &group.residues {
            match residue.state() {
                ResidueState::FullyOn => fully_on.push(residue.residue_id),
                ResidueState::Heterogeneous => {
                    chain_is_full = false;
                    expressions.extend(residue.atoms.iter().filter(|(_, on)| *on).map(
                        |(name, _)| SelectionExpression::Atom {
                            chain: group.chain.to_string(),
                            residue_id: residue.residue_id.to_string(),
                            atom_name: name.to_string(),
                        },
                    ));
                }
                ResidueState::FullyOff => chain_is_full = false,
            }
        }

        if chain_is_full {
            whole_chains.push(SelectionExpression::Chain {
                chain: group.chain.to_string(),
            });
            continue;
        }

        let numbers = fully_on
            .iter()
            .map(|residue| {
                identifiers::parse_residue_number(residue).ok_or_else(|| {
                    InputError::NonNumericResidue {
                        chain: group.chain.to_string(),
                        residue: residue.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        expressions.extend(ranges::collapse_residue_ranges(&numbers).into_iter().map(
            |(start, end)| SelectionExpression::ResidueRange {
                chain: group.chain.to_string(),
                start,
                end,
            },
        ));
    }

    if whole_chains.len() == chains.len() {
        return Ok(SelectionSet::from(vec![SelectionExpression::All]));
    }
    expressions.extend(whole_chains);
    Ok(SelectionSet::from(expressions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn atom(id: i64, chain: &str, resi: &str, name: &str) -> AtomRecord {
        AtomRecord::new(id, chain, resi, "ALA", name, &name[..1])
    }

    fn strings(set: &SelectionSet) -> Vec<String> {
        set.to_strings()
    }

    fn residues(chain: &str, ids: &[i64], first_id: i64) -> Vec<AtomRecord> {
        ids.iter()
            .enumerate()
            .map(|(i, r)| atom(first_id + i as i64, chain, &r.to_string(), "CA"))
            .collect()
    }

    #[test]
    fn single_fully_flagged_chain_collapses_to_wildcard() {
        let atoms = residues("A", &[1, 2, 3, 4], 1);
        let set = compress(&atoms, |_| true).unwrap();
        assert_eq!(strings(&set), vec!["*"]);
    }

    #[test]
    fn fully_flagged_chain_next_to_unflagged_chain_is_whole_chain() {
        let mut atoms = residues("A", &[1, 2, 3, 4], 1);
        atoms.extend(residues("B", &[1, 2], 10));
        let set = compress(&atoms, |a| a.chain == "A").unwrap();
        assert_eq!(strings(&set), vec![":A"]);
    }

    #[test]
    fn partially_flagged_chain_emits_ranges() {
        let atoms = residues("A", &[1, 2, 3, 4, 5, 6], 1);
        let set = compress(&atoms, |a| a.residue_id != "5" && a.residue_id != "6").unwrap();
        assert_eq!(strings(&set), vec!["1-4:A"]);
    }

    #[test]
    fn ranges_collapse_across_gaps() {
        let atoms = residues("A", &[1, 2, 3, 4, 5, 6, 7, 8], 1);
        let on = ["1", "2", "3", "5", "6", "8"];
        let set = compress(&atoms, |a| on.contains(&a.residue_id.as_str())).unwrap();
        assert_eq!(strings(&set), vec!["1-3:A", "5-6:A", "8:A"]);
    }

    #[test]
    fn heterogeneous_residue_emits_only_flagged_atoms() {
        let atoms = vec![
            atom(1, "B", "10", "N"),
            atom(2, "B", "10", "CA"),
            atom(3, "B", "10", "C"),
            atom(4, "B", "11", "N"),
            atom(5, "B", "11", "CA"),
        ];
        let set = compress(&atoms, |a| a.residue_id == "10" && a.atom_name != "CA").unwrap();
        assert_eq!(strings(&set), vec!["10:B.N", "10:B.C"]);
        assert!(!strings(&set).iter().any(|s| s == ":B" || s == "*"));
    }

    #[test]
    fn heterogeneous_residue_breaks_chain_collapse_but_keeps_ranges() {
        let atoms = vec![
            atom(1, "A", "1", "N"),
            atom(2, "A", "1", "CA"),
            atom(3, "A", "2", "N"),
            atom(4, "A", "2", "CA"),
            atom(5, "A", "3", "N"),
            atom(6, "A", "3", "CA"),
        ];
        let set = compress(&atoms, |a| a.residue_id != "2" || a.atom_name == "N").unwrap();
        assert_eq!(strings(&set), vec!["2:A.N", "1:A", "3:A"]);
    }

    #[test]
    fn whole_chain_expressions_come_after_per_chain_expressions() {
        let mut atoms = residues("A", &[1, 2], 1);
        atoms.extend(residues("B", &[1, 2, 3], 10));
        let set = compress(&atoms, |a| a.chain == "A" || a.residue_id == "2").unwrap();
        assert_eq!(strings(&set), vec!["2:B", ":A"]);
    }

    #[test]
    fn nothing_flagged_yields_empty_set() {
        let atoms = residues("A", &[1, 2], 1);
        assert!(compress(&atoms, |_| false).unwrap().is_empty());
    }

    #[test]
    fn zero_atoms_yield_empty_set() {
        assert!(compress(&[], |_| true).unwrap().is_empty());
    }

    #[test]
    fn empty_chain_fails_fast() {
        let atoms = vec![atom(1, "A", "1", "CA"), atom(7, "", "1", "CA")];
        assert_eq!(
            compress(&atoms, |_| true),
            Err(InputError::MissingChain { atom_id: 7 })
        );
    }

    #[test]
    fn repeated_atom_names_emit_one_expression() {
        let atoms = vec![
            atom(1, "A", "10", "OG"),
            atom(2, "A", "10", "OG"),
            atom(3, "A", "10", "CA"),
        ];
        let set = compress(&atoms, |a| a.atom_name == "OG").unwrap();
        assert_eq!(strings(&set), vec!["10:A.OG"]);
    }

    #[test]
    fn repeated_atom_name_keeps_the_last_flag() {
        let atoms = vec![
            atom(1, "A", "10", "OG"),
            atom(2, "A", "10", "CA"),
            atom(3, "A", "10", "OG"),
        ];
        let set = compress(&atoms, |a| a.id != 3).unwrap();
        assert_eq!(strings(&set), vec!["10:A.CA"]);
    }

    #[test]
    fn flag_count_must_match_atom_count() {
        let atoms = vec![atom(1, "A", "1", "CA"), atom(2, "B", "1", "CA")];
        assert_eq!(
            compress_flagged(&atoms, &[true]),
            Err(InputError::FlagCountMismatch { atoms: 2, flags: 1 })
        );
        assert_eq!(
            compress_flagged(&atoms, &[true, false, true]),
            Err(InputError::FlagCountMismatch { atoms: 2, flags: 3 })
        );
        assert_eq!(strings(&compress_flagged(&atoms, &[true, false]).unwrap()), vec![":A"]);
    }

    #[test]
    fn insertion_code_in_range_fails_fast() {
        let atoms = vec![
            atom(1, "A", "12", "CA"),
            atom(2, "A", "12A", "CA"),
            atom(3, "A", "13", "CA"),
        ];
        let result = compress(&atoms, |a| a.id != 3);
        assert_eq!(
            result,
            Err(InputError::NonNumericResidue {
                chain: "A".to_string(),
                residue: "12A".to_string(),
            })
        );
    }

    #[test]
    fn insertion_code_is_fine_when_no_range_is_needed() {
        let atoms = vec![atom(1, "A", "12", "CA"), atom(2, "A", "12A", "CA")];
        assert_eq!(strings(&compress(&atoms, |_| true).unwrap()), vec!["*"]);
    }

    #[test]
    fn expressions_cover_exactly_the_flagged_atoms() {
        let mut atoms = Vec::new();
        let mut id = 0;
        for chain in ["A", "B", "C"] {
            for resi in 1..=6 {
                for name in ["N", "CA", "C", "O"] {
                    id += 1;
                    atoms.push(atom(id, chain, &resi.to_string(), name));
                }
            }
        }
        let flag = |a: &AtomRecord| match a.chain.as_str() {
            "A" => true,
            "B" => a.id % 3 == 0,
            _ => a.residue_id.parse::<i64>().unwrap() % 2 == 0,
        };

        let set = compress(&atoms, flag).unwrap();
        for a in &atoms {
            assert_eq!(set.covers(a), flag(a), "atom {}", a.id);
        }
        for a in atoms.iter().filter(|a| flag(a)) {
            let claims = set.iter().filter(|e| e.matches(a)).count();
            assert_eq!(claims, 1, "atom {} claimed {} times", a.id, claims);
        }
    }

    #[test]
    fn compression_is_idempotent_and_order_independent() {
        let mut atoms = residues("A", &[1, 2, 3, 5], 1);
        atoms.extend(residues("B", &[7, 8], 20));
        let flag = |a: &AtomRecord| a.residue_id != "3";

        let first = compress(&atoms, flag).unwrap();
        let second = compress(&atoms, flag).unwrap();
        assert_eq!(first, second);

        let mut reversed = atoms.clone();
        reversed.reverse();
        let third = compress(&reversed, flag).unwrap();
        let as_set = |s: &SelectionSet| s.to_strings().into_iter().collect::<HashSet<_>>();
        assert_eq!(as_set(&first), as_set(&third));
    }
}
