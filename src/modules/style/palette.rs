//! Per-segment colors for the construction scaffold.
//!
//! Every scaffold segment keeps one color for the whole animation, so the
//! moving interpolation lines stay visually traceable from frame to frame.
//! Colors are drawn lazily the first time a segment is asked for and are
//! never evicted.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::SegmentKey;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex notation, e.g. `#1a2b3c`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lazily assigned, stable colors for scaffold segments.
///
/// The palette remembers every color it has handed out, keyed by
/// [`SegmentKey`], so repeated queries for the same segment always return
/// the same color.
#[derive(Debug, Clone)]
pub struct SegmentPalette {
    colors: HashMap<SegmentKey, Color>,
    rng: StdRng,
}

impl SegmentPalette {
    /// Create a palette with colors drawn from OS entropy
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a palette with a fixed seed, for reproducible colors
    pub fn with_seed(seed: u64) -> Self {
        Self {
            colors: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The color of a segment, drawing a fresh random one on first use
    pub fn color_for(&mut self, key: SegmentKey) -> Color {
        if let Some(&color) = self.colors.get(&key) {
            return color;
        }
        let color = Color::new(self.rng.gen(), self.rng.gen(), self.rng.gen());
        self.colors.insert(key, color);
        color
    }

    /// Number of segments that have been assigned a color so far
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no color has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for SegmentPalette {
    fn default() -> Self {
        Self::new()
    }
}
