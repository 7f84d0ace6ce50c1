use crate::core::models::atom::AtomRecord;
use crate::core::models::color_map::ColorMap;
use crate::core::palette::ColorSwatch;
use crate::engine::config::NonCarbonColoring;
use crate::engine::context::CompileContext;
use crate::engine::error::{EngineError, InputError};
use crate::engine::progress::Progress;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Atom ids per color id, in first-seen color order.
#[derive(Debug, Default)]
struct ColorUsage {
    colors: Vec<(i32, Vec<i64>)>,
}

impl ColorUsage {
    fn add(&mut self, color_id: i32, atom_id: i64) {
        match self.colors.iter_mut().find(|(c, _)| *c == color_id) {
            Some((_, ids)) => ids.push(atom_id),
            None => self.colors.push((color_id, vec![atom_id])),
        }
    }

    fn merge(&mut self, other: &ColorUsage) {
        for (color_id, ids) in &other.colors {
            for &id in ids {
                self.add(*color_id, id);
            }
        }
    }

    /// Most used color; ties go to the color seen first.
    fn majority(&self) -> Option<i32> {
        let mut best: Option<(i32, usize)> = None;
        for (color_id, ids) in &self.colors {
            if best.is_none_or(|(_, count)| ids.len() > count) {
                best = Some((*color_id, ids.len()));
            }
        }
        best.map(|(color_id, _)| color_id)
    }

    fn is_uniform(&self) -> bool {
        self.colors.len() == 1
    }
}

/// Insertion-ordered map, keyed by a string borrowed from the atoms.
struct Grouped<'a, T> {
    order: Vec<&'a str>,
    items: HashMap<&'a str, T>,
}

impl<T> Default for Grouped<'_, T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<'a, T: Default> Grouped<'a, T> {
    fn entry(&mut self, key: &'a str) -> &mut T {
        if !self.items.contains_key(key) {
            self.order.push(key);
        }
        self.items.entry(key).or_default()
    }

    fn iter(&self) -> impl Iterator<Item = (&'a str, &T)> {
        self.order.iter().filter_map(|key| self.items.get(key).map(|v| (*key, v)))
    }
}

fn hex_of(palette: &ColorSwatch, color_id: i32, atom_id: i64) -> Result<String, InputError> {
    palette
        .lookup(color_id)
        .map(|item| item.hex.clone())
        .ok_or(InputError::UnknownColor { atom_id, color_id })
}

/// Reduces per-atom colors to the layered [`ColorMap`].
///
/// Every atom's color id must exist in `palette` or be an inline `0x40RRGGBB` color.
pub fn reduce(
    atoms: &[AtomRecord],
    palette: &ColorSwatch,
    mode: NonCarbonColoring,
) -> Result<ColorMap, InputError> {
    let mut hexes: HashMap<i32, String> = HashMap::new();
    for atom in atoms {
        if !hexes.contains_key(&atom.color_id) {
            hexes.insert(atom.color_id, hex_of(palette, atom.color_id, atom.id)?);
        }
    }
    let hex = |color_id: i32| hexes.get(&color_id).cloned().unwrap_or_default();

    let mut by_element: Grouped<ColorUsage> = Grouped::default();
    let mut by_chain: Grouped<Grouped<ColorUsage>> = Grouped::default();
    for atom in atoms {
        if atom.is_carbon() {
            by_chain
                .entry(&atom.chain)
                .entry(&atom.residue_id)
                .add(atom.color_id, atom.id);
        } else {
            by_element.entry(&atom.element).add(atom.color_id, atom.id);
        }
    }

    let mut map = ColorMap::new();

    for (element, usage) in by_element.iter() {
        let Some(top) = usage.majority() else {
            continue;
        };
        map.elemental.insert(element.to_string(), hex(top));
        if usage.is_uniform() || mode == NonCarbonColoring::Uniform {
            continue;
        }
        for (color_id, ids) in usage.colors.iter().filter(|(c, _)| *c != top) {
            let color = hex(*color_id);
            for &id in ids {
                map.serial.insert(id, color.clone());
            }
        }
    }

    for (chain, residues) in by_chain.iter() {
        let mut chain_usage = ColorUsage::default();
        for (_, usage) in residues.iter() {
            chain_usage.merge(usage);
        }
        let Some(top) = chain_usage.majority() else {
            continue;
        };
        map.chain.insert(chain.to_string(), hex(top));

        for (residue_id, usage) in residues.iter() {
            if usage.is_uniform() {
                let color_id = usage.colors[0].0;
                if color_id != top {
                    map.residue
                        .insert(format!("{}{}", chain, residue_id), hex(color_id));
                }
            } else {
                for (color_id, ids) in &usage.colors {
                    let color = hex(*color_id);
                    for &id in ids {
                        map.serial.insert(id, color.clone());
                    }
                }
            }
        }
    }

    Ok(map)
}

#[instrument(skip_all, name = "color_task")]
pub fn run(atoms: &[AtomRecord], context: &CompileContext) -> Result<ColorMap, EngineError> {
    let mode = context.config.non_carbon_coloring;
    info!(atoms = atoms.len(), mode = ?mode, "Reducing atom colors.");
    context
        .reporter
        .report(Progress::Message("Reducing colors...".to_string()));

    let map = reduce(atoms, context.palette(), mode)?;

    debug!(
        elements = map.elemental.len(),
        chains = map.chain.len(),
        residues = map.residue.len(),
        serials = map.serial.len(),
        "Color map layers built."
    );
    Ok(map)
}
