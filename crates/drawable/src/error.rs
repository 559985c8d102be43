use thiserror::Error;

/// Failure while rendering a wrapped shape.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The output sink rejected a write.
    #[error("failed to write shape output: {0}")]
    Io(#[from] std::io::Error),

    /// The wrapper was moved out of with `Shape::take` and holds nothing.
    #[error("cannot draw an empty shape (value was moved out)")]
    Empty,

    /// A shape inside a collection failed; `index` is its insertion position.
    #[error("shape #{index} failed to draw")]
    At {
        index: usize,
        #[source]
        source: Box<DrawError>,
    },
}

impl DrawError {
    /// Innermost error, unwrapping any collection position context.
    pub fn root(&self) -> &DrawError {
        match self {
            Self::At { source, .. } => source.root(),
            other => other,
        }
    }
}
