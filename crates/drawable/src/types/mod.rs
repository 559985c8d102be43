pub mod draw;
pub mod shapes;
