//! Feature type colours
//!
//! Colours come from a fixed, ordered palette and are handed out
//! front to back, one per feature type, never reused within a run.

use indexmap::IndexMap;

use super::groups::FeatureGroups;
use crate::error::{IprError, Result};

/// Colour-blind friendly colours from the microshades CVD palette
/// (<https://github.com/KarstensLab/microshades>).
pub const MICROSHADES_CVD: [&str; 21] = [
    "4E7705", "9D654C", "098BD9", "148F77", "7D3560", "6D9F06", "C17754", "F09163", "56B4E9",
    "009E73", "A1527F", "97CE2F", "FCB076", "7DCCFF", "43BA8F", "CC79A7", "BDEC6F", "FFD5AF",
    "BCE1FF", "48C9B0", "EFB6D6",
];

/// Ordered colour codes with a cursor past the ones already taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<String>,
    next: usize,
}

impl Palette {
    /// Palette over the given hex RGB codes, in order
    pub fn new<I, S>(colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colours: colours.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Take the next unused colour
    pub fn take(&mut self) -> Option<String> {
        let colour = self.colours.get(self.next)?.clone();
        self.next += 1;
        Some(colour)
    }

    /// Number of colours not taken yet
    pub fn remaining(&self) -> usize {
        self.colours.len() - self.next
    }

    /// Total number of colours, taken or not
    pub fn capacity(&self) -> usize {
        self.colours.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(MICROSHADES_CVD)
    }
}

/// Colour bound to each feature type, in allocation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourMap {
    colours: IndexMap<String, String>,
}

impl ColourMap {
    /// Bind one colour per type of `groups`, in their first-seen order.
    ///
    /// Fails without taking anything from `palette` when there are more
    /// types than colours left.
    pub fn allocate(groups: &FeatureGroups, palette: &mut Palette) -> Result<Self> {
        if groups.len() > palette.remaining() {
            return Err(IprError::palette_exhausted(groups.len(), palette.remaining()));
        }

        let mut colours = IndexMap::with_capacity(groups.len());
        for type_tag in groups.types() {
            let colour = palette
                .take()
                .ok_or_else(|| IprError::palette_exhausted(groups.len(), colours.len()))?;
            colours.insert(type_tag.to_string(), colour);
        }

        Ok(Self { colours })
    }

    /// Colour bound to `type_tag`
    pub fn get(&self, type_tag: &str) -> Option<&str> {
        self.colours.get(type_tag).map(String::as_str)
    }

    /// `(type, colour)` pairs in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colours.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
