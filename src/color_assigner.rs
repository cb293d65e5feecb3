//! Stable per-tag display colors.
//!
//! Each tag gets a light pastel color derived from its long form. The color
//! is a pure function of the tag, so it is the same on every run; the cache
//! only saves recomputation.

use std::collections::HashMap;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Tag;
use crate::color::Color;

/// Lower bound of each generated channel. Darker colors are hard to read on
/// dark consoles.
const CHANNEL_MIN: f32 = 0.5;
/// Upper bound of each generated channel.
const CHANNEL_MAX: f32 = 0.97;

/// Signed 32-bit FNV-1a hash of a string's UTF-8 bytes.
pub fn tag_hash(long_form: &str) -> i32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let hash = long_form.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(PRIME)
    });
    hash as i32
}

/// Derive the display color for a tag long form.
///
/// Seeds one generator from [`tag_hash`] and draws r, g, b in that order.
/// `ChaCha8Rng` has a fixed output stream, so a tag keeps its color across
/// builds and crate upgrades.
pub fn derive_color(long_form: &str) -> Color {
    let seed = i64::from(tag_hash(long_form)) as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let r = channel_in_range(&mut rng);
    let g = channel_in_range(&mut rng);
    let b = channel_in_range(&mut rng);
    Color::rgb(r, g, b)
}

fn channel_in_range(rng: &mut ChaCha8Rng) -> f32 {
    let sample: f64 = rng.r#gen();
    sample as f32 * (CHANNEL_MAX - CHANNEL_MIN) + CHANNEL_MIN
}

/// Memoizing tag → color map. Entries are never evicted.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    colors: Mutex<HashMap<Tag, Color>>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `tag`, computed on first request.
    ///
    /// Lookup and insert happen under one lock so concurrent first requests
    /// for the same tag compute it once. Nothing is logged while the lock is
    /// held: a `log` backend may format through this same assigner.
    pub fn color_for(&self, tag: &Tag) -> Color {
        let color = {
            let mut colors = self.colors.lock();
            if let Some(color) = colors.get(tag) {
                return *color;
            }
            let color = derive_color(&tag.long_form());
            colors.insert(tag.clone(), color);
            color
        };
        log::trace!("Assigned color {} to tag {}", color, tag);
        color
    }

    /// Number of tags with an assigned color.
    pub fn len(&self) -> usize {
        self.colors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.lock().is_empty()
    }
}
