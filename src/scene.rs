//! Vector scene model and its SVG serialization.

pub mod color;
pub mod model;
pub mod pen;
pub mod svg;

pub use color::Color;
pub use model::{
    CANVAS_SIZE, GradientKind, Group, LineCap, LineJoin, Node, Paint, PaintDef, Scene, Shape,
    Stop, Style,
};
pub use pen::Pen;
