//! Poorttypes en de compatibiliteitsrelatie tussen uit- en ingangen.

use std::fmt;

use serde::Serialize;

/// Het soort waarde dat een poort levert of verwacht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PortType {
    Function,
    Warp,
    Grid,
    Element,
    /// Meta-type: elke waarde die als scène getoond kan worden.
    Visualisable,
}

impl PortType {
    /// Geeft aan of een ingang van dit type een uitgang van type `source` accepteert.
    #[must_use]
    pub const fn accepts(self, source: Self) -> bool {
        match self {
            Self::Visualisable => matches!(source, Self::Grid | Self::Element),
            Self::Function => matches!(source, Self::Function),
            Self::Warp => matches!(source, Self::Warp),
            Self::Grid => matches!(source, Self::Grid),
            Self::Element => matches!(source, Self::Element),
        }
    }

    #[must_use]
    pub const fn is_meta(self) -> bool {
        matches!(self, Self::Visualisable)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Warp => "Warp",
            Self::Grid => "Grid",
            Self::Element => "Element",
            Self::Visualisable => "Visualisable",
        }
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
