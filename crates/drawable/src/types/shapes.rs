use std::io;

use super::draw::DrawShape;

// ─── Circle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self { Self { radius } }

    pub fn radius(&self) -> f64 { self.radius }
}

impl DrawShape for Circle {
    fn draw_shape(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Circle: {}", self.radius())
    }
}

// ─── Square ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self { Self { side } }

    pub fn side(&self) -> f64 { self.side }
}

impl DrawShape for Square {
    fn draw_shape(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Square: {}", self.side())
    }
}

// ─── Triangle ─────────────────────────────────────────────────────────────────

/// Attribute-less shape; only its type carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle;

impl DrawShape for Triangle {
    fn draw_shape(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Δ")
    }
}
