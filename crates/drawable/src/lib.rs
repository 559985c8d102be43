pub mod types;
pub mod runtime;
pub mod error;

pub use types::draw::{DrawFn, DrawShape, draw_shape};
pub use types::shapes::{Circle, Square, Triangle};
pub use runtime::shape::Shape;
pub use error::DrawError;

use std::io;

// ─── Collection ───────────────────────────────────────────────────────────────

/// Ordered sequence of shapes. Insertion order is draw order.
pub type Shapes = Vec<Shape>;

/// Draw a single wrapped shape.
pub fn draw(shape: &Shape, out: &mut dyn io::Write) -> Result<(), DrawError> {
    shape.draw(out)
}

/// Draw every shape in insertion order. Stops at the first failure and
/// reports its position.
pub fn draw_all(shapes: &[Shape], out: &mut dyn io::Write) -> Result<(), DrawError> {
    for (index, shape) in shapes.iter().enumerate() {
        shape.draw(out).map_err(|e| DrawError::At { index, source: Box::new(e) })?;
    }
    Ok(())
}
