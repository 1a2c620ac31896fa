//! Waarden die over verbindingen tussen nodes stromen.

use core::fmt;

use crate::geom::{Element, Grid};
use crate::warp::{ScalarFunction, WarpFunction};

use super::port::PortType;

/// Uitkomst van een node-berekening.
#[derive(Debug, Clone)]
pub enum Value {
    /// Een scalaire functie `ℝ → ℝ`.
    Function(ScalarFunction),
    /// Een genormaliseerde warp.
    Warp(WarpFunction),
    /// Kolom- en rijgrenzen van een raster.
    Grid(Grid),
    /// Een geordende verzameling vormen.
    Element(Element),
}

impl Value {
    /// Het poorttype waarmee deze waarde overeenkomt.
    #[must_use]
    pub fn kind(&self) -> PortType {
        match self {
            Self::Function(_) => PortType::Function,
            Self::Warp(_) => PortType::Warp,
            Self::Grid(_) => PortType::Grid,
            Self::Element(_) => PortType::Element,
        }
    }

    pub fn expect_function(&self) -> Result<&ScalarFunction, ValueError> {
        match self {
            Self::Function(function) => Ok(function),
            _ => Err(ValueError::type_mismatch("Function", self.kind())),
        }
    }

    pub fn expect_warp(&self) -> Result<&WarpFunction, ValueError> {
        match self {
            Self::Warp(warp) => Ok(warp),
            _ => Err(ValueError::type_mismatch("Warp", self.kind())),
        }
    }

    pub fn expect_grid(&self) -> Result<&Grid, ValueError> {
        match self {
            Self::Grid(grid) => Ok(grid),
            _ => Err(ValueError::type_mismatch("Grid", self.kind())),
        }
    }

    pub fn expect_element(&self) -> Result<&Element, ValueError> {
        match self {
            Self::Element(element) => Ok(element),
            _ => Err(ValueError::type_mismatch("Element", self.kind())),
        }
    }
}

impl From<ScalarFunction> for Value {
    fn from(function: ScalarFunction) -> Self {
        Self::Function(function)
    }
}

impl From<WarpFunction> for Value {
    fn from(warp: WarpFunction) -> Self {
        Self::Warp(warp)
    }
}

impl From<Grid> for Value {
    fn from(grid: Grid) -> Self {
        Self::Grid(grid)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Typefout voor wanneer een `Value` naar het verkeerde type wordt
/// geconverteerd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    expected: &'static str,
    found: PortType,
}

impl ValueError {
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: PortType) -> Self {
        Self { expected, found }
    }

    #[must_use]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    #[must_use]
    pub fn found(&self) -> PortType {
        self.found
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "verwachtte type `{}` maar kreeg `{}`",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ValueError {}
