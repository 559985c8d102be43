use std::io;

/// The draw capability. Any type with an impl can be wrapped in a
/// [`Shape`](crate::Shape); types without one are rejected at compile time.
///
/// The value writes a human-readable description of itself to `out`.
pub trait DrawShape {
    fn draw_shape(&self, out: &mut dyn io::Write) -> io::Result<()>;
}

/// A free draw function bound to a concrete type when it is wrapped.
pub type DrawFn<T> = fn(&T, &mut dyn io::Write) -> io::Result<()>;

/// Draw an unwrapped value directly.
pub fn draw_shape<T: DrawShape + ?Sized>(value: &T, out: &mut dyn io::Write) -> io::Result<()> {
    value.draw_shape(out)
}
