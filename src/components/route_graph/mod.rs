mod component;
mod graph;
mod playback;
mod render;
mod state;
mod stepper;
mod style;
mod types;

pub use component::{Command, RouteGraphCanvas};
pub use graph::Graph;
pub use render::Selection;
pub use state::RunSummary;
pub use stepper::Termination;
pub use style::PALETTE;
pub use types::{GraphData, GraphLink, GraphNode, NodeId};
