//! Random utilities
//!
//! Everything draws from the caller's RNG so a seeded run is reproducible.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer in [min, max] inclusive. `max` must not be below `min`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(max >= min, "empty range {min}..={max}");
    rng.random_range(min..=max)
}

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CSS colour string, e.g. `rgb(12,200,7)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Colour with each channel independently uniform in [0, 255]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let r = random_int(rng, 0, 255) as u8;
    let g = random_int(rng, 0, 255) as u8;
    let b = random_int(rng, 0, 255) as u8;
    Rgb::new(r, g, b)
}
