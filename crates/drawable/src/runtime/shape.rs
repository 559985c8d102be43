use std::any::{self, Any};
use std::fmt;
use std::io;

use tracing::{debug, trace};

use crate::error::DrawError;
use crate::types::draw::{DrawFn, DrawShape};

// ─── Concept ──────────────────────────────────────────────────────────────────

/// Type-erased holder interface. `Shape` only ever sees this trait, so copying
/// has to go through `clone_box`: the model knows its own concrete type and
/// can reproduce itself, the wrapper cannot.
trait ShapeConcept: Any {
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()>;
    fn clone_box(&self) -> Box<dyn ShapeConcept>;
}

// ─── Model ────────────────────────────────────────────────────────────────────

/// One instantiation per wrapped type. The draw binding is picked when the
/// value is wrapped and travels with the object from then on.
#[derive(Clone)]
struct ShapeModel<T> {
    object: T,
    draw:   DrawFn<T>,
}

impl<T: Clone + 'static> ShapeConcept for ShapeModel<T> {
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        (self.draw)(&self.object, out)
    }

    fn clone_box(&self) -> Box<dyn ShapeConcept> { Box::new(self.clone()) }
}

/// Holder plus the name of its concrete type, replaced as one unit.
struct Held {
    concept:   Box<dyn ShapeConcept>,
    type_name: &'static str,
}

impl Held {
    fn duplicate(&self) -> Held {
        Held { concept: self.concept.clone_box(), type_name: self.type_name }
    }
}

// ─── Shape ────────────────────────────────────────────────────────────────────

/// Owns one value of any drawable type and renders it without exposing that
/// type. Cloning duplicates the held value; the copies share nothing.
///
/// A `Shape` becomes empty only through [`Shape::take`]. Drawing an empty
/// shape fails with [`DrawError::Empty`].
pub struct Shape {
    held: Option<Held>,
}

impl Shape {
    /// Wrap `value`, binding its [`DrawShape`] impl.
    ///
    /// ```
    /// use drawable::{Circle, Shape};
    ///
    /// let mut out = Vec::new();
    /// Shape::new(Circle::new(230.0)).draw(&mut out).unwrap();
    /// assert_eq!(out, b"Circle: 230\n");
    /// ```
    ///
    /// Types without a [`DrawShape`] impl do not compile:
    ///
    /// ```compile_fail
    /// use drawable::Shape;
    ///
    /// #[derive(Clone)]
    /// struct NoDraw;
    ///
    /// let _shape = Shape::new(NoDraw);
    /// ```
    pub fn new<T: DrawShape + Clone + 'static>(value: T) -> Self {
        Self::with_draw(value, T::draw_shape)
    }

    /// Wrap `value` with an explicit draw function. The type needs no
    /// `DrawShape` impl.
    ///
    /// ```
    /// use std::io;
    /// use drawable::Shape;
    ///
    /// #[derive(Clone)]
    /// struct NoDraw;
    ///
    /// fn draw_no_draw(_: &NoDraw, out: &mut dyn io::Write) -> io::Result<()> {
    ///     writeln!(out, "no draw")
    /// }
    ///
    /// let mut out = Vec::new();
    /// Shape::with_draw(NoDraw, draw_no_draw).draw(&mut out).unwrap();
    /// assert_eq!(out, b"no draw\n");
    /// ```
    pub fn with_draw<T: Clone + 'static>(value: T, draw: DrawFn<T>) -> Self {
        let held = Held {
            concept:   Box::new(ShapeModel { object: value, draw }),
            type_name: any::type_name::<T>(),
        };
        Self { held: Some(held) }
    }

    pub fn draw(&self, out: &mut dyn io::Write) -> Result<(), DrawError> {
        let held = self.held.as_ref().ok_or(DrawError::Empty)?;
        trace!(shape = held.type_name, "draw");
        held.concept.draw(out)?;
        Ok(())
    }

    /// Move the held value out into a new `Shape`, leaving `self` empty.
    pub fn take(&mut self) -> Shape {
        trace!(shape = self.type_name().unwrap_or("<empty>"), "take");
        Shape { held: self.held.take() }
    }

    pub fn is_empty(&self) -> bool { self.held.is_none() }

    /// Name of the concrete type currently held.
    pub fn type_name(&self) -> Option<&'static str> {
        self.held.as_ref().map(|h| h.type_name)
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let concept: &dyn Any = &*self.held.as_ref()?.concept;
        concept.downcast_ref::<ShapeModel<T>>().map(|m| &m.object)
    }

    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        let concept: &mut dyn Any = &mut *self.held.as_mut()?.concept;
        concept.downcast_mut::<ShapeModel<T>>().map(|m| &mut m.object)
    }
}

impl Clone for Shape {
    fn clone(&self) -> Self {
        debug!(shape = self.type_name().unwrap_or("<empty>"), "copy ctor");
        Self { held: self.held.as_ref().map(Held::duplicate) }
    }

    /// Value and draw binding are replaced together.
    fn clone_from(&mut self, source: &Self) {
        debug!(
            from = source.type_name().unwrap_or("<empty>"),
            over = self.type_name().unwrap_or("<empty>"),
            "copy assign"
        );
        self.held = source.held.as_ref().map(Held::duplicate);
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self.type_name().unwrap_or("<empty>"))
    }
}
