pub use controller::*;
pub use geometry::*;

mod controller;
mod geometry;
