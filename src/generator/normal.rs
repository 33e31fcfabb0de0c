//! Box-Muller normal generator
//!
//! Converts two ambient draws into one standard normal deviate:
//! - u1, u2 taken from the open interval (0, 1), so `ln(u1)` is finite
//! - z0 = sqrt(-2 ln u1) * cos(2 pi u2)
//!
//! The matching `sin` deviate is thrown away, so every sample costs two
//! ambient draws.

use crate::constants::labels;
use crate::generator::NormalGenerator;
use crate::source::AmbientSource;
use std::f64::consts::PI;

/// Normal generator built on the Box-Muller transform
pub struct BoxMullerGenerator<'a, S: AmbientSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: AmbientSource + ?Sized> BoxMullerGenerator<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: AmbientSource + ?Sized> NormalGenerator for BoxMullerGenerator<'_, S> {
    fn label(&self) -> &str {
        labels::NORMAL
    }

    fn draw(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.source.next_unit_open();
        let u2 = self.source.next_unit_open();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z0
    }
}
