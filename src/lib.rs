//! Rekenkern voor procedurele vectorgraphics.
//!
//! Een [`Graph`] van getypeerde nodes bouwt functies, warps, grids en
//! elementen op; elke node wordt op aanvraag berekend met [`Graph::compute`]
//! en kan met [`Graph::visualise`] als preview getoond worden. De
//! geometrie (Bézier- en Catmull-Rom-curves met booglengte-sampling,
//! polygonen, ellipsen, grids) staat los bruikbaar in [`geom`].

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod geom;
pub mod graph;
pub mod warp;

pub use components::combination::{Combination, CombinationKind};
pub use components::{ComponentError, ComponentKind, ComponentRegistry};
pub use graph::evaluator::EvaluationError;
pub use graph::node::{NodeId, NodeKind};
pub use graph::port::PortType;
pub use graph::preview::Preview;
pub use graph::property::PropertyValue;
pub use graph::value::Value;
pub use graph::{Graph, GraphError, VariantSwitch};
pub use warp::{ScalarFunction, WarpError, WarpFunction};
