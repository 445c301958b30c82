//! Stepwise single-source shortest-path search.
//!
//! The search runs to completion synchronously and records every settle and
//! every relaxation as a [`StepRecord`], so that playback can reveal progress
//! one step at a time.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use log::debug;
use thiserror::Error;

use super::graph::Graph;
use super::types::{EdgeKey, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	#[error("unknown node {0}")]
	UnknownNode(NodeId),
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
	ReachedTarget,
	FrontierExhausted,
}

/// One atomic unit of search progress, in chronological order.
#[derive(Clone, Debug, PartialEq)]
pub enum StepRecord {
	Settle {
		node: NodeId,
		distance: f64,
	},
	/// Every comparison is recorded, including ones that do not improve `to`.
	Relax {
		from: NodeId,
		to: NodeId,
		candidate: f64,
		improved: bool,
	},
	Terminate(Termination),
}

/// Best known distance and predecessor per node.
///
/// Unreached nodes keep a distance of `f64::INFINITY` and no predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
	distances: BTreeMap<NodeId, f64>,
	predecessors: BTreeMap<NodeId, Option<NodeId>>,
}

impl DistanceTable {
	fn new(graph: &Graph, source: NodeId) -> Self {
		let distances = graph
			.nodes()
			.iter()
			.map(|n| (n.id, if n.id == source { 0.0 } else { f64::INFINITY }))
			.collect();
		let predecessors = graph.nodes().iter().map(|n| (n.id, None)).collect();
		Self {
			distances,
			predecessors,
		}
	}

	pub fn distance(&self, node: NodeId) -> f64 {
		self.distances.get(&node).copied().unwrap_or(f64::INFINITY)
	}

	pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
		self.predecessors.get(&node).copied().flatten()
	}

	fn improve(&mut self, node: NodeId, distance: f64, via: NodeId) {
		self.distances.insert(node, distance);
		self.predecessors.insert(node, Some(via));
	}
}

/// Node sequence from source to target; empty when the target is unreachable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathResult(Vec<NodeId>);

impl PathResult {
	pub fn nodes(&self) -> &[NodeId] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, node: NodeId) -> bool {
		self.0.contains(&node)
	}

	/// Number of hops along the path.
	pub fn stops(&self) -> usize {
		self.0.len().saturating_sub(1)
	}

	/// Keys of the edges joining consecutive path nodes.
	pub fn edge_keys(&self) -> BTreeSet<EdgeKey> {
		self.0.windows(2).map(|w| EdgeKey::new(w[0], w[1])).collect()
	}
}

/// Everything one search produces.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
	pub source: NodeId,
	pub target: NodeId,
	pub steps: Vec<StepRecord>,
	pub table: DistanceTable,
	pub path: PathResult,
}

impl SearchOutcome {
	pub fn termination(&self) -> Option<Termination> {
		match self.steps.last() {
			Some(StepRecord::Terminate(reason)) => Some(*reason),
			_ => None,
		}
	}

	/// Final distance to the target, `None` when no path exists.
	pub fn distance(&self) -> Option<f64> {
		(!self.path.is_empty()).then(|| self.table.distance(self.target))
	}
}

/// Frontier candidate. Ordered by distance, then by push order, so equal
/// distances pop first-in first-out.
#[derive(Clone, Copy, Debug)]
struct Candidate {
	distance: f64,
	seq: u64,
	node: NodeId,
}

impl PartialEq for Candidate {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Candidate {
	fn cmp(&self, other: &Self) -> Ordering {
		self.distance
			.total_cmp(&other.distance)
			.then(self.seq.cmp(&other.seq))
	}
}

/// Min-priority frontier. Stale duplicates stay in the heap and are
/// skipped on pop once their node is settled.
#[derive(Default)]
struct Frontier {
	heap: BinaryHeap<Reverse<Candidate>>,
	next_seq: u64,
}

impl Frontier {
	fn push(&mut self, node: NodeId, distance: f64) {
		self.heap.push(Reverse(Candidate {
			distance,
			seq: self.next_seq,
			node,
		}));
		self.next_seq += 1;
	}

	fn pop(&mut self) -> Option<Candidate> {
		self.heap.pop().map(|Reverse(c)| c)
	}
}

/// Runs the search from `source` until `target` is settled or the frontier
/// is exhausted.
///
/// Neighbors are relaxed in the graph's edge order, and the target's own
/// neighbors are relaxed before the search stops.
pub fn shortest_path(
	graph: &Graph,
	source: NodeId,
	target: NodeId,
) -> Result<SearchOutcome, SearchError> {
	for id in [source, target] {
		if !graph.contains(id) {
			return Err(SearchError::UnknownNode(id));
		}
	}

	let mut table = DistanceTable::new(graph, source);
	let mut visited = BTreeSet::new();
	let mut frontier = Frontier::default();
	let mut steps = Vec::new();
	frontier.push(source, 0.0);

	let reason = loop {
		let Some(Candidate { node, distance, .. }) = frontier.pop() else {
			break Termination::FrontierExhausted;
		};
		if !visited.insert(node) {
			continue;
		}
		steps.push(StepRecord::Settle { node, distance });

		let neighbors = graph
			.neighbors(node)
			.map_err(|_| SearchError::UnknownNode(node))?;
		for neighbor in neighbors {
			if visited.contains(&neighbor.node) {
				continue;
			}
			let candidate = distance + neighbor.weight;
			let improved = candidate < table.distance(neighbor.node);
			steps.push(StepRecord::Relax {
				from: node,
				to: neighbor.node,
				candidate,
				improved,
			});
			if improved {
				table.improve(neighbor.node, candidate, node);
				frontier.push(neighbor.node, candidate);
			}
		}

		if node == target {
			break Termination::ReachedTarget;
		}
	};
	steps.push(StepRecord::Terminate(reason));

	let path = if visited.contains(&target) {
		reconstruct(&table, source, target, graph.nodes().len())
	} else {
		PathResult::default()
	};
	debug!(
		"search {} -> {}: {} steps, {:?}, path {:?}",
		source,
		target,
		steps.len(),
		reason,
		path.nodes()
	);

	Ok(SearchOutcome {
		source,
		target,
		steps,
		table,
		path,
	})
}

fn reconstruct(table: &DistanceTable, source: NodeId, target: NodeId, limit: usize) -> PathResult {
	let mut nodes = vec![target];
	let mut current = target;
	while current != source {
		match table.predecessor(current) {
			Some(prev) if nodes.len() <= limit => {
				nodes.push(prev);
				current = prev;
			}
			_ => return PathResult::default(),
		}
	}
	nodes.reverse();
	PathResult(nodes)
}


#[cfg(test)]
mod proptests {
	use super::super::graph::tests::{data, weight};
	use super::*;
	use proptest::prelude::*;

	const N: NodeId = 7;

	fn arb_graph() -> impl Strategy<Value = Graph> {
		proptest::collection::btree_map((0..N, 0..N), 0u8..12, 0..18).prop_map(|pairs| {
			let mut seen = BTreeSet::new();
			let links: Vec<(NodeId, NodeId, f64)> = pairs
				.into_iter()
				.filter(|&((a, b), _)| a != b && seen.insert(EdgeKey::new(a, b)))
				.map(|((a, b), w)| (a, b, w as f64))
				.collect();
			let nodes: Vec<NodeId> = (0..N).collect();
			Graph::new(&data(&nodes, &links)).unwrap()
		})
	}

	fn floyd_warshall(graph: &Graph) -> Vec<Vec<f64>> {
		let n = N as usize;
		let mut d = vec![vec![f64::INFINITY; n]; n];
		for (i, row) in d.iter_mut().enumerate() {
			row[i] = 0.0;
		}
		for e in graph.edges() {
			let (a, b) = (e.from as usize, e.to as usize);
			d[a][b] = d[a][b].min(e.weight);
			d[b][a] = d[b][a].min(e.weight);
		}
		for k in 0..n {
			for i in 0..n {
				for j in 0..n {
					let via = d[i][k] + d[k][j];
					if via < d[i][j] {
						d[i][j] = via;
					}
				}
			}
		}
		d
	}

	proptest! {
		#[test]
		fn settled_distances_are_optimal(g in arb_graph(), s in 0..N, t in 0..N) {
			let outcome = shortest_path(&g, s, t).unwrap();
			let truth = floyd_warshall(&g);
			for step in &outcome.steps {
				if let StepRecord::Settle { node, distance } = step {
					prop_assert_eq!(*distance, truth[s as usize][*node as usize]);
				}
			}
			prop_assert_eq!(outcome.path.is_empty(), truth[s as usize][t as usize].is_infinite());
		}

		#[test]
		fn paths_follow_edges_and_sum_to_the_distance(g in arb_graph(), s in 0..N, t in 0..N) {
			let outcome = shortest_path(&g, s, t).unwrap();
			if let Some(distance) = outcome.distance() {
				let nodes = outcome.path.nodes();
				prop_assert_eq!(nodes.first(), Some(&s));
				prop_assert_eq!(nodes.last(), Some(&t));
				let mut total = 0.0;
				for w in nodes.windows(2) {
					let w = weight(&g, w[0], w[1]);
					prop_assert!(w.is_some());
					total += w.unwrap_or_default();
				}
				prop_assert_eq!(total, distance);
			}
		}

		#[test]
		fn searches_are_deterministic(g in arb_graph(), s in 0..N, t in 0..N) {
			prop_assert_eq!(shortest_path(&g, s, t).unwrap(), shortest_path(&g, s, t).unwrap());
		}

		#[test]
		fn tentative_distances_never_increase(g in arb_graph(), s in 0..N, t in 0..N) {
			let outcome = shortest_path(&g, s, t).unwrap();
			let mut best: BTreeMap<NodeId, f64> = BTreeMap::new();
			best.insert(s, 0.0);
			for step in &outcome.steps {
				if let StepRecord::Relax { to, candidate, improved: true, .. } = step {
					let previous = best.get(to).copied().unwrap_or(f64::INFINITY);
					prop_assert!(*candidate < previous);
					best.insert(*to, *candidate);
				}
			}
		}

		#[test]
		fn terminal_step_is_last_and_unique(g in arb_graph(), s in 0..N, t in 0..N) {
			let outcome = shortest_path(&g, s, t).unwrap();
			let terminals = outcome
				.steps
				.iter()
				.filter(|s| matches!(s, StepRecord::Terminate(_)))
				.count();
			prop_assert_eq!(terminals, 1);
			let expected = if outcome.path.is_empty() {
				Termination::FrontierExhausted
			} else {
				Termination::ReachedTarget
			};
			prop_assert_eq!(outcome.termination(), Some(expected));
		}
	}
}
