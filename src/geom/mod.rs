mod bezier;
mod catmull_rom;
mod core;
mod curve;
mod grid;
mod shape;

pub use bezier::{
    BEZIER_BASIS, CubicBezierCurve, CubicBezierSpline, DEFAULT_TABLE_SAMPLES, DistanceEntry,
    DistanceTable,
};
pub use catmull_rom::{CatmullRomCurve, DEFAULT_TENSION, cardinal_basis};
pub use core::{Point2, Tolerance};
pub use curve::{Curve2, CurveError, polyline_length, sample_uniform};
pub use grid::{Grid, GridCell};
pub use shape::{Element, Ellipse, Polygon, Shape};

#[cfg(test)]
mod tests;
