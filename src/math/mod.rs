mod color;
mod ray;

pub use color::{srgb_to_linear, Color};
pub use ray::Ray;
