//! Previews van nodewaarden voor een host-editor.
//!
//! Functies en warps worden als grafiek getoond, grids en elementen als
//! scène. Coördinaten liggen in een kader van `width × height` met de y-as
//! naar beneden voor grafieken.

use std::fmt;

use serde::Serialize;

use crate::geom::{Element, Grid, Point2, Polygon};
use crate::graph::value::Value;
use crate::warp::{ScalarFunction, WarpError, WarpFunction, uniform_parameters};

/// Aantal samples in een functie- of warpgrafiek.
pub const PREVIEW_SAMPLES: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Preview {
    /// Polyline door de samples van een functie of warp.
    Plot {
        width: f64,
        height: f64,
        points: Vec<Point2>,
    },
    /// Vormen geschaald naar het kader.
    Scene {
        width: f64,
        height: f64,
        element: Element,
    },
    /// Er is geen waarde om te tonen (ontbrekende invoer).
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    InvalidSize { height: f64, aspect_ratio: f64 },
    Warp(WarpError),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                height,
                aspect_ratio,
            } => write!(
                f,
                "ongeldige previewgrootte: hoogte {height}, beeldverhouding {aspect_ratio}"
            ),
            Self::Warp(error) => write!(f, "warp kon niet gesampled worden: {error}"),
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Warp(error) => Some(error),
            Self::InvalidSize { .. } => None,
        }
    }
}

impl From<WarpError> for PreviewError {
    fn from(error: WarpError) -> Self {
        Self::Warp(error)
    }
}

/// Maakt een preview van `value` met hoogte `height` en breedte
/// `height * aspect_ratio`.
pub fn visualise(
    value: Option<&Value>,
    height: f64,
    aspect_ratio: f64,
) -> Result<Preview, PreviewError> {
    let valid = |x: f64| x.is_finite() && x > 0.0;
    if !valid(height) || !valid(aspect_ratio) {
        return Err(PreviewError::InvalidSize {
            height,
            aspect_ratio,
        });
    }
    let width = height * aspect_ratio;

    let Some(value) = value else {
        return Ok(Preview::Unavailable);
    };

    let preview = match value {
        Value::Function(function) => Preview::Plot {
            width,
            height,
            points: plot_function(function, width, height),
        },
        Value::Warp(warp) => Preview::Plot {
            width,
            height,
            points: plot_warp(warp, width, height)?,
        },
        Value::Grid(grid) => Preview::Scene {
            width,
            height,
            element: grid_outline(grid).scale(width, height),
        },
        Value::Element(element) => Preview::Scene {
            width,
            height,
            element: element.scale(width, height),
        },
    };
    Ok(preview)
}

/// `f` over `[0, 1]`, met de y-waarden uitgerekt over de hoogte van het kader.
/// Niet-eindige waarden worden overgeslagen.
fn plot_function(function: &ScalarFunction, width: f64, height: f64) -> Vec<Point2> {
    let samples: Vec<(f64, f64)> = uniform_parameters(PREVIEW_SAMPLES)
        .map(|u| (u, function.eval(u)))
        .filter(|(_, y)| y.is_finite())
        .collect();

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let span = max - min;

    samples
        .into_iter()
        .map(|(u, y)| {
            let level = if span > 0.0 { (y - min) / span } else { 0.5 };
            Point2::new(u * width, height * (1.0 - level))
        })
        .collect()
}

/// Sample `i` van de warp tegen zijn index; warps liggen al in `[0, 1]`.
fn plot_warp(warp: &WarpFunction, width: f64, height: f64) -> Result<Vec<Point2>, WarpError> {
    let samples = warp.sample(PREVIEW_SAMPLES)?;
    Ok(uniform_parameters(PREVIEW_SAMPLES)
        .zip(samples)
        .map(|(u, value)| Point2::new(u * width, height * (1.0 - value)))
        .collect())
}

/// Eén rechthoek per cel, in genormaliseerde coördinaten.
fn grid_outline(grid: &Grid) -> Element {
    grid.cells()
        .map(|cell| Polygon::rectangle(cell.x, cell.y, cell.width, cell.height).into())
        .collect()
}
