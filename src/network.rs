//! The fixed delivery network shown by the app.

use crate::components::route_graph::{GraphData, GraphLink, GraphNode};

const NODES: &[(u32, f64, f64, &str)] = &[
	(0, 100.0, 200.0, "Restaurant A"),
	(1, 300.0, 150.0, "Hub Central"),
	(2, 500.0, 100.0, "Customer 1"),
	(3, 200.0, 350.0, "Restaurant B"),
	(4, 400.0, 300.0, "Hub North"),
	(5, 600.0, 250.0, "Customer 2"),
	(6, 150.0, 500.0, "Restaurant C"),
	(7, 350.0, 450.0, "Hub South"),
	(8, 550.0, 400.0, "Customer 3"),
	(9, 700.0, 350.0, "Customer 4"),
];

const LINKS: &[(u32, u32, f64)] = &[
	(0, 1, 5.0),
	(0, 3, 3.0),
	(1, 2, 4.0),
	(1, 4, 6.0),
	(2, 5, 3.0),
	(3, 4, 4.0),
	(3, 6, 5.0),
	(4, 5, 2.0),
	(4, 7, 3.0),
	(4, 8, 5.0),
	(5, 9, 4.0),
	(6, 7, 4.0),
	(7, 8, 3.0),
	(8, 9, 2.0),
];

pub const DEFAULT_SOURCE: u32 = 0;
pub const DEFAULT_TARGET: u32 = 9;

pub fn delivery_network() -> GraphData {
	GraphData {
		nodes: NODES
			.iter()
			.map(|&(id, x, y, name)| GraphNode {
				id,
				x,
				y,
				name: name.into(),
			})
			.collect(),
		links: LINKS
			.iter()
			.map(|&(from, to, weight)| GraphLink { from, to, weight })
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::route_graph::Graph;

	#[test]
	fn network_is_well_formed() {
		let graph = Graph::new(&delivery_network()).unwrap();
		assert_eq!(graph.nodes().len(), 10);
		assert_eq!(graph.edges().len(), 14);
		assert!(graph.contains(DEFAULT_SOURCE));
		assert!(graph.contains(DEFAULT_TARGET));
	}
}
