//! Modulo-reduction generator
//!
//! `next_integer() % n`. When the source span is not a multiple of `n` the
//! low residues are hit once more often than the high ones; that bias is what
//! the battery is meant to expose, so it is left in place.

use crate::constants::labels;
use crate::generator::IntGenerator;
use crate::source::AmbientSource;

/// Integer generator reducing each ambient draw modulo `n`
pub struct ModuloGenerator<'a, S: AmbientSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: AmbientSource + ?Sized> ModuloGenerator<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: AmbientSource + ?Sized> IntGenerator for ModuloGenerator<'_, S> {
    fn label(&self) -> &str {
        labels::MODULO
    }

    fn draw(&mut self, n: u32) -> u32 {
        self.source.next_integer() % n
    }
}
