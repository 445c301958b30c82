use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use log::info;

use super::stepper::{PathResult, SearchOutcome, StepRecord, Termination};
use super::types::{EdgeKey, NodeId};

/// Cancellation flag shared between a run's owner and its playback.
#[derive(Clone, Debug, Default)]
pub struct RunHandle(Rc<Cell<bool>>);

impl RunHandle {
	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// What the renderer sees of a run at the current playback cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualizationState {
	pub explored: BTreeSet<EdgeKey>,
	/// Tentative distances as of the last settle; unreached nodes are absent
	/// or `f64::INFINITY`.
	pub distances: BTreeMap<NodeId, f64>,
	pub visited: BTreeSet<NodeId>,
	pub path: PathResult,
	pub termination: Option<Termination>,
	/// Number of steps applied so far.
	pub cursor: usize,
}

impl VisualizationState {
	pub fn distance(&self, node: NodeId) -> Option<f64> {
		self.distances.get(&node).copied().filter(|d| d.is_finite())
	}
}

/// Replays a step log at a fixed pace.
///
/// Steps are applied one at a time and in order. The handle is checked
/// before every step, so a cancelled run keeps the state of its last fully
/// applied step.
#[derive(Debug, Default)]
pub struct Playback {
	steps: Vec<StepRecord>,
	final_path: PathResult,
	delay: f64,
	pending: f64,
	handle: RunHandle,
	tentative: BTreeMap<NodeId, f64>,
	state: VisualizationState,
}

impl Playback {
	pub fn new(outcome: SearchOutcome, delay: f64, handle: RunHandle) -> Self {
		let mut tentative = BTreeMap::new();
		tentative.insert(outcome.source, 0.0);
		Self {
			steps: outcome.steps,
			final_path: outcome.path,
			delay,
			pending: delay,
			handle,
			tentative,
			state: VisualizationState::default(),
		}
	}

	pub fn state(&self) -> &VisualizationState {
		&self.state
	}

	pub fn handle(&self) -> &RunHandle {
		&self.handle
	}

	pub fn is_finished(&self) -> bool {
		self.state.cursor >= self.steps.len()
	}

	pub fn is_running(&self) -> bool {
		!self.is_finished() && !self.handle.is_cancelled()
	}

	/// Advances the clock by `dt` seconds, applying one step per elapsed
	/// delay. Returns whether any step was applied.
	pub fn tick(&mut self, dt: f64) -> bool {
		if !self.is_running() {
			return false;
		}
		self.pending += dt;
		let mut applied = false;
		while self.pending >= self.delay && self.step() {
			self.pending -= self.delay;
			applied = true;
		}
		applied
	}

	/// Applies the next step immediately, unless the run is cancelled or done.
	pub fn step(&mut self) -> bool {
		if self.handle.is_cancelled() {
			return false;
		}
		let Some(step) = self.steps.get(self.state.cursor) else {
			return false;
		};
		match *step {
			StepRecord::Settle { node, distance } => {
				self.tentative.insert(node, distance);
				self.state.visited.insert(node);
				self.state.distances = self.tentative.clone();
			}
			StepRecord::Relax {
				from,
				to,
				candidate,
				improved,
			} => {
				self.state.explored.insert(EdgeKey::new(from, to));
				if improved {
					self.tentative.insert(to, candidate);
				}
			}
			StepRecord::Terminate(reason) => {
				self.state.path = self.final_path.clone();
				self.state.termination = Some(reason);
				info!(
					"playback finished after {} steps: {:?}",
					self.steps.len(),
					reason
				);
			}
		}
		self.state.cursor += 1;
		true
	}
}
