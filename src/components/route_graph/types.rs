use std::fmt;

/// Stable small-integer node identifier.
pub type NodeId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub from: NodeId,
	pub to: NodeId,
	pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Order-independent key of an undirected edge, lower endpoint first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
	pub fn new(a: NodeId, b: NodeId) -> Self {
		Self(a.min(b), a.max(b))
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.0, self.1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_key_ignores_endpoint_order() {
		assert_eq!(EdgeKey::new(7, 3), EdgeKey::new(3, 7));
		assert_eq!(EdgeKey::new(4, 1).to_string(), "1-4");
	}
}
