use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::types::{EdgeKey, GraphData, GraphLink, GraphNode, NodeId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
	#[error("invalid reference to unknown node {node}")]
	InvalidReference { node: NodeId },

	#[error("duplicate node id {0}")]
	DuplicateNode(NodeId),

	#[error("duplicate edge {0}")]
	DuplicateEdge(EdgeKey),

	#[error("self-loop on node {0}")]
	SelfLoop(NodeId),

	#[error("edge {edge} has invalid weight {weight}")]
	InvalidWeight { edge: EdgeKey, weight: f64 },
}

/// A neighbor reachable over one undirected edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
	pub node: NodeId,
	pub weight: f64,
}

/// Immutable node/edge registry with adjacency lookup.
///
/// Nodes and edges keep the order they were supplied in, and each node's
/// neighbors are listed in edge order. Traversal order therefore depends
/// only on the input data.
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphLink>,
	index: HashMap<NodeId, usize>,
	adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
	pub fn new(data: &GraphData) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			if index.insert(node.id, i).is_some() {
				return Err(GraphError::DuplicateNode(node.id));
			}
		}

		let mut adjacency = vec![Vec::new(); data.nodes.len()];
		let mut seen = HashSet::new();
		for link in &data.links {
			let (Some(&a), Some(&b)) = (index.get(&link.from), index.get(&link.to)) else {
				let node = if index.contains_key(&link.from) {
					link.to
				} else {
					link.from
				};
				return Err(GraphError::InvalidReference { node });
			};
			if link.from == link.to {
				return Err(GraphError::SelfLoop(link.from));
			}
			let key = EdgeKey::new(link.from, link.to);
			if !link.weight.is_finite() || link.weight < 0.0 {
				return Err(GraphError::InvalidWeight {
					edge: key,
					weight: link.weight,
				});
			}
			if !seen.insert(key) {
				return Err(GraphError::DuplicateEdge(key));
			}
			adjacency[a].push(Neighbor {
				node: link.to,
				weight: link.weight,
			});
			adjacency[b].push(Neighbor {
				node: link.from,
				weight: link.weight,
			});
		}

		Ok(Self {
			nodes: data.nodes.clone(),
			edges: data.links.clone(),
			index,
			adjacency,
		})
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[GraphLink] {
		&self.edges
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.index.contains_key(&id)
	}

	pub fn node(&self, id: NodeId) -> Result<&GraphNode, GraphError> {
		self.slot(id).map(|i| &self.nodes[i])
	}

	pub fn neighbors(&self, id: NodeId) -> Result<&[Neighbor], GraphError> {
		self.slot(id).map(|i| self.adjacency[i].as_slice())
	}

	pub fn edge_key(&self, a: NodeId, b: NodeId) -> Result<EdgeKey, GraphError> {
		self.slot(a)?;
		self.slot(b)?;
		Ok(EdgeKey::new(a, b))
	}

	fn slot(&self, id: NodeId) -> Result<usize, GraphError> {
		self.index
			.get(&id)
			.copied()
			.ok_or(GraphError::InvalidReference { node: id })
	}
}
