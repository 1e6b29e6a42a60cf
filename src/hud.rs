//! Ball-count readout
//!
//! Refreshed only when the evil circle pops something, not every frame.

use crate::consts::COUNT_LABEL;
use crate::sim::Ball;

/// A text element the simulation can overwrite
pub trait Readout {
    fn set_text(&mut self, text: &str);
}

#[cfg(test)]
impl Readout for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Readout that writes to the log (native runs)
#[derive(Debug, Default)]
pub struct LogReadout;

impl Readout for LogReadout {
    fn set_text(&mut self, text: &str) {
        log::info!("{}", text);
    }
}

#[cfg(target_arch = "wasm32")]
impl Readout for web_sys::Element {
    fn set_text(&mut self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Readout text for `alive` balls
pub fn format_count(alive: usize) -> String {
    format!("{}: {}", COUNT_LABEL, alive)
}

/// Recount alive balls and show the result. Returns the count.
pub fn refresh_count<R: Readout + ?Sized>(balls: &[Ball], readout: &mut R) -> usize {
    let alive = balls.iter().filter(|b| b.is_alive()).count();
    readout.set_text(&format_count(alive));
    alive
}
