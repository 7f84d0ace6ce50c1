use super::selection::SelectionSet;
use bitflags::bitflags;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Packed per-atom representation bits as stored by the graphics engine.
    ///
    /// Bit 0 is the least significant bit. Bits above 11 carry no meaning for
    /// scene compilation and are dropped by [`RepresentationFlags::from_bitmask`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RepresentationFlags: u32 {
        /// Bit 0: sticks.
        const STICKS = 1 << 0;
        /// Bit 1: spheres.
        const SPHERES = 1 << 1;
        /// Bit 2: solid surface.
        const SURFACE = 1 << 2;
        /// Bit 3: text label.
        const LABEL = 1 << 3;
        /// Bit 4: non-bonded spheres, the heteroatom alias of `SPHERES`.
        const NONBONDED_SPHERES = 1 << 4;
        /// Bit 5: cartoon.
        const CARTOON = 1 << 5;
        /// Bit 6: ribbon (backbone trace).
        const RIBBON = 1 << 6;
        /// Bit 7: lines.
        const LINES = 1 << 7;
        /// Bit 8: mesh surface.
        const MESH = 1 << 8;
        /// Bit 9: dots.
        const DOTS = 1 << 9;
        /// Bit 10: non-bonded, the heteroatom alias of `LINES`.
        const NONBONDED = 1 << 10;
        /// Bit 11: unit cell.
        const CELL = 1 << 11;
    }
}

impl RepresentationFlags {
    pub fn from_bitmask(bitmask: u32) -> Self {
        Self::from_bits_truncate(bitmask)
    }

    /// Folds the heteroatom aliases into their primary channels.
    ///
    /// The engine may flag a heteroatom as spheres or lines through either of two
    /// internal bits; both must count.
    pub fn with_hetero_aliases(self) -> Self {
        let mut flags = self;
        if flags.contains(Self::NONBONDED_SPHERES) {
            flags |= Self::SPHERES;
        }
        if flags.contains(Self::NONBONDED) {
            flags |= Self::LINES;
        }
        flags
    }
}

/// A selection-bearing representation channel, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sticks,
    Spheres,
    Surface,
    Cartoon,
    Ribbon,
    Lines,
    Mesh,
    Dots,
    Cell,
    /// Derived from the cartoon sub-mode, not from a bit.
    Putty,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::Sticks,
        Channel::Spheres,
        Channel::Surface,
        Channel::Cartoon,
        Channel::Ribbon,
        Channel::Lines,
        Channel::Mesh,
        Channel::Dots,
        Channel::Cell,
        Channel::Putty,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Sticks => "sticks",
            Channel::Spheres => "spheres",
            Channel::Surface => "surface",
            Channel::Cartoon => "cartoon",
            Channel::Ribbon => "ribbon",
            Channel::Lines => "lines",
            Channel::Mesh => "mesh",
            Channel::Dots => "dots",
            Channel::Cell => "cell",
            Channel::Putty => "putty",
        }
    }

    /// The bit backing this channel, or `None` for putty.
    pub fn flag(&self) -> Option<RepresentationFlags> {
        match self {
            Channel::Sticks => Some(RepresentationFlags::STICKS),
            Channel::Spheres => Some(RepresentationFlags::SPHERES),
            Channel::Surface => Some(RepresentationFlags::SURFACE),
            Channel::Cartoon => Some(RepresentationFlags::CARTOON),
            Channel::Ribbon => Some(RepresentationFlags::RIBBON),
            Channel::Lines => Some(RepresentationFlags::LINES),
            Channel::Mesh => Some(RepresentationFlags::MESH),
            Channel::Dots => Some(RepresentationFlags::DOTS),
            Channel::Cell => Some(RepresentationFlags::CELL),
            Channel::Putty => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown representation channel '{0}'")]
pub struct ParseChannelError(pub String);

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == lowered)
            .ok_or_else(|| ParseChannelError(s.to_string()))
    }
}

/// Selection expressions for every channel, kept in [`Channel::ALL`] order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepresentationSet {
    entries: Vec<(Channel, SelectionSet)>,
}

impl RepresentationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the set for `channel`, replacing any previous one.
    pub fn insert(&mut self, channel: Channel, selections: SelectionSet) {
        match self.entries.iter_mut().find(|(c, _)| *c == channel) {
            Some((_, existing)) => *existing = selections,
            None => {
                self.entries.push((channel, selections));
                self.entries.sort_by_key(|(c, _)| *c);
            }
        }
    }

    pub fn get(&self, channel: Channel) -> Option<&SelectionSet> {
        self.entries
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, selections)| selections)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &SelectionSet)> {
        self.entries.iter().map(|(c, s)| (*c, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RepresentationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (channel, selections) in &self.entries {
            map.serialize_entry(channel.name(), selections)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::selection::SelectionExpression;

    #[test]
    fn bit_table_matches_engine_layout() {
        assert_eq!(RepresentationFlags::STICKS.bits(), 0b1);
        assert_eq!(RepresentationFlags::LABEL.bits(), 0b1000);
        assert_eq!(RepresentationFlags::CARTOON.bits(), 32);
        assert_eq!(RepresentationFlags::LINES.bits(), 128);
        assert_eq!(RepresentationFlags::CELL.bits(), 2048);
    }

    #[test]
    fn from_bitmask_drops_unknown_high_bits() {
        let flags = RepresentationFlags::from_bitmask((1 << 12) | (1 << 5) | 1);
        assert_eq!(flags, RepresentationFlags::CARTOON | RepresentationFlags::STICKS);
    }

    #[test]
    fn hetero_aliases_fold_into_primary_channels() {
        let flags = RepresentationFlags::NONBONDED_SPHERES | RepresentationFlags::NONBONDED;
        let folded = flags.with_hetero_aliases();
        assert!(folded.contains(RepresentationFlags::SPHERES));
        assert!(folded.contains(RepresentationFlags::LINES));

        let plain = RepresentationFlags::STICKS.with_hetero_aliases();
        assert_eq!(plain, RepresentationFlags::STICKS);
    }

    #[test]
    fn every_channel_but_putty_has_a_bit() {
        for channel in Channel::ALL {
            assert_eq!(channel.flag().is_none(), channel == Channel::Putty);
        }
    }

    #[test]
    fn channel_parses_from_its_name() {
        assert_eq!(Channel::from_str("Cartoon"), Ok(Channel::Cartoon));
        assert_eq!(Channel::from_str("putty"), Ok(Channel::Putty));
        assert!(Channel::from_str("licorice").is_err());
    }

    #[test]
    fn representation_set_keeps_channel_order_and_replaces_entries() {
        let mut set = RepresentationSet::new();
        set.insert(Channel::Putty, SelectionSet::default());
        set.insert(Channel::Sticks, SelectionSet::from(vec![SelectionExpression::All]));
        set.insert(Channel::Sticks, SelectionSet::default());

        let order: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Channel::Sticks, Channel::Putty]);
        assert!(set.get(Channel::Sticks).unwrap().is_empty());
        assert!(set.get(Channel::Cartoon).is_none());
    }

    #[test]
    fn representation_set_serializes_as_named_map() {
        let mut set = RepresentationSet::new();
        set.insert(Channel::Cartoon, SelectionSet::from(vec![SelectionExpression::All]));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"cartoon":["*"]}"#);
    }
}
