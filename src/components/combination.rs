//! Combinatienodes: één node die tussen een vaste lijst componenten kan
//! wisselen.

use std::fmt;

use serde::Serialize;

use super::{ComponentKind, function, shape, warp};

const FUNCTION_CANDIDATES: &[ComponentKind] = &[
    ComponentKind::Function(function::ComponentKind::Polynomial),
    ComponentKind::Function(function::ComponentKind::PiecewiseLinear),
    ComponentKind::Function(function::ComponentKind::Expression),
    ComponentKind::Function(function::ComponentKind::Random),
    ComponentKind::Function(function::ComponentKind::Identity),
];

const WARP_CANDIDATES: &[ComponentKind] = &[
    ComponentKind::Warp(warp::ComponentKind::PositionWarp),
    ComponentKind::Warp(warp::ComponentKind::RelativeWarp),
];

const STAMP_CANDIDATES: &[ComponentKind] = &[
    ComponentKind::Shape(shape::ComponentKind::Polygon),
    ComponentKind::Shape(shape::ComponentKind::Ellipse),
    ComponentKind::Shape(shape::ComponentKind::BezierShape),
    ComponentKind::Shape(shape::ComponentKind::CatmullRomShape),
];

/// De gesloten set combinatiesoorten, elk met een vaste kandidatenlijst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CombinationKind {
    Function,
    Warp,
    Stamp,
}

impl CombinationKind {
    #[must_use]
    pub fn candidates(self) -> &'static [ComponentKind] {
        match self {
            Self::Function => FUNCTION_CANDIDATES,
            Self::Warp => WARP_CANDIDATES,
            Self::Stamp => STAMP_CANDIDATES,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Function => "Function Combination",
            Self::Warp => "Warp Combination",
            Self::Stamp => "Stamp Combination",
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selectie binnen een [`CombinationKind`]. De index ligt altijd binnen de
/// kandidatenlijst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    kind: CombinationKind,
    selected: usize,
}

impl Combination {
    /// Nieuwe combinatie met de eerste kandidaat geselecteerd.
    #[must_use]
    pub const fn new(kind: CombinationKind) -> Self {
        Self { kind, selected: 0 }
    }

    /// Combinatie met kandidaat `index`, of `None` buiten de lijst.
    #[must_use]
    pub fn with_selection(kind: CombinationKind, index: usize) -> Option<Self> {
        (index < kind.candidates().len()).then_some(Self {
            kind,
            selected: index,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> CombinationKind {
        self.kind
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn candidates(&self) -> &'static [ComponentKind] {
        self.kind.candidates()
    }

    /// Het component waaraan deze combinatie op dit moment delegeert.
    #[must_use]
    pub fn selected(&self) -> ComponentKind {
        self.kind.candidates()[self.selected]
    }

    /// Positie van `component` in de kandidatenlijst.
    #[must_use]
    pub fn position_of(&self, component: ComponentKind) -> Option<usize> {
        self.candidates().iter().position(|candidate| *candidate == component)
    }
}
