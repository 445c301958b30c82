use log::{info, warn};

use super::graph::Graph;
use super::playback::{Playback, RunHandle, VisualizationState};
use super::render::{self, Scene, Selection};
use super::stepper::{SearchError, Termination, shortest_path};
use super::style::{PlaybackConfig, Style};
use super::types::NodeId;

/// Headline numbers of the current run, for the statistics panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
	pub running: bool,
	pub stops: usize,
	/// Total route distance, `None` when unreachable or not finished.
	pub distance: Option<f64>,
	pub explored: usize,
	pub termination: Option<Termination>,
}

/// Owns the graph and at most one playback run.
pub struct RouteGraphState {
	pub graph: Graph,
	pub style: Style,
	pub selection: Selection,
	pub playback_config: PlaybackConfig,
	pub width: f64,
	pub height: f64,
	playback: Playback,
}

impl RouteGraphState {
	pub fn new(graph: Graph, width: f64, height: f64) -> Self {
		Self {
			graph,
			style: Style::default(),
			selection: Selection::default(),
			playback_config: PlaybackConfig::default(),
			width,
			height,
			playback: Playback::default(),
		}
	}

	/// Cancels any active run, resets the visualization and starts replaying
	/// a fresh search. Unknown endpoints leave the current run untouched.
	pub fn run(&mut self, source: NodeId, target: NodeId) -> Result<RunHandle, SearchError> {
		let outcome = shortest_path(&self.graph, source, target).inspect_err(|e| {
			warn!("run {} -> {} rejected: {}", source, target, e);
		})?;
		info!(
			"run {} -> {} started: {} steps, {:?}, distance {:?}",
			source,
			target,
			outcome.steps.len(),
			outcome.termination(),
			outcome.distance()
		);
		self.playback.handle().cancel();
		self.selection = Selection {
			source: Some(source),
			target: Some(target),
		};
		let handle = RunHandle::default();
		self.playback = Playback::new(outcome, self.playback_config.step_delay, handle.clone());
		Ok(handle)
	}

	pub fn reset(&mut self) {
		if self.playback.is_running() {
			info!("run cancelled by reset");
		}
		self.playback.handle().cancel();
		self.playback = Playback::default();
	}

	pub fn set_style(&mut self, exploration: &str, path: &str) {
		self.style.exploration = exploration.to_owned();
		self.style.path = path.to_owned();
	}

	pub fn select(&mut self, selection: Selection) {
		self.selection = selection;
	}

	pub fn view(&self) -> &VisualizationState {
		self.playback.state()
	}

	pub fn is_running(&self) -> bool {
		self.playback.is_running()
	}

	pub fn tick(&mut self, dt: f64) -> bool {
		self.playback.tick(dt)
	}

	pub fn scene(&self) -> Scene {
		render::compose(
			&self.graph,
			self.view(),
			&self.style,
			self.selection,
			(self.width, self.height),
		)
	}

	pub fn summary(&self) -> RunSummary {
		let view = self.playback.state();
		let distance = match (view.path.nodes().last(), view.termination) {
			(Some(&target), Some(Termination::ReachedTarget)) => view.distance(target),
			_ => None,
		};
		RunSummary {
			running: self.is_running(),
			stops: view.path.stops(),
			distance,
			explored: view.explored.len(),
			termination: view.termination,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::graph::tests::data;
	use super::*;

	fn triangle_state() -> RouteGraphState {
		let g = Graph::new(&data(&[0, 1, 2, 3], &[(0, 1, 5.0), (1, 2, 3.0), (0, 2, 10.0)])).unwrap();
		RouteGraphState::new(g, 800.0, 600.0)
	}

	fn drain(state: &mut RouteGraphState) {
		while state.tick(state.playback_config.step_delay) {}
	}

	#[test]
	fn run_replays_to_a_summary() {
		let mut state = triangle_state();
		state.run(0, 2).unwrap();
		assert!(state.is_running());
		drain(&mut state);
		assert_eq!(
			state.summary(),
			RunSummary {
				running: false,
				stops: 2,
				distance: Some(8.0),
				explored: 3,
				termination: Some(Termination::ReachedTarget),
			}
		);
	}

	#[test]
	fn unreachable_target_reports_no_distance() {
		let mut state = triangle_state();
		state.run(0, 3).unwrap();
		drain(&mut state);
		let summary = state.summary();
		assert_eq!(summary.distance, None);
		assert_eq!(summary.stops, 0);
		assert_eq!(summary.termination, Some(Termination::FrontierExhausted));
	}

	#[test]
	fn unknown_node_never_starts_a_run() {
		let mut state = triangle_state();
		let first = state.run(0, 2).unwrap();
		state.tick(0.0);
		let before = state.view().clone();
		assert_eq!(state.run(0, 42).unwrap_err(), SearchError::UnknownNode(42));
		assert!(!first.is_cancelled());
		assert_eq!(state.view(), &before);
		assert_eq!(state.selection.target, Some(2));
	}

	#[test]
	fn new_run_cancels_the_previous_one() {
		let mut state = triangle_state();
		let first = state.run(0, 2).unwrap();
		state.tick(0.0);
		state.tick(0.5);
		let second = state.run(2, 0).unwrap();
		assert!(first.is_cancelled());
		assert!(!second.is_cancelled());
		assert_eq!(state.view(), &VisualizationState::default());
		state.tick(0.0);
		assert_eq!(state.view().distance(2), Some(0.0));
	}

	#[test]
	fn cancelled_handle_stops_playback() {
		let mut state = triangle_state();
		let handle = state.run(0, 2).unwrap();
		state.tick(0.0);
		handle.cancel();
		let frozen = state.view().clone();
		assert!(!state.tick(5.0));
		assert_eq!(state.view(), &frozen);
		assert!(!state.summary().running);
	}

	#[test]
	fn reset_clears_the_visualization() {
		let mut state = triangle_state();
		let handle = state.run(0, 2).unwrap();
		drain(&mut state);
		state.reset();
		assert!(handle.is_cancelled());
		assert_eq!(state.view(), &VisualizationState::default());
		assert_eq!(state.summary(), RunSummary::default());
	}

	#[test]
	fn style_changes_reach_the_scene() {
		let mut state = triangle_state();
		state.run(0, 2).unwrap();
		drain(&mut state);
		state.set_style("#06b6d4", "#ec4899");
		let scene = state.scene();
		assert!(scene.edges.iter().any(|e| e.color == "#ec4899"));
		assert!(scene.edges.iter().any(|e| e.color == "#06b6d4"));
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	fn delivery_state() -> RouteGraphState {
		let graph = Graph::new(&crate::network::delivery_network()).unwrap();
		RouteGraphState::new(graph, 800.0, 600.0)
	}

	proptest! {
		#[test]
		fn reset_and_rerun_replays_like_an_uninterrupted_run(k in 0usize..40, s in 0u32..10, t in 0u32..10) {
			let mut replayed = delivery_state();
			let delay = replayed.playback_config.step_delay;
			let first = replayed.run(s, t).unwrap();
			for _ in 0..k {
				replayed.tick(delay);
			}
			replayed.reset();
			prop_assert!(first.is_cancelled());
			prop_assert_eq!(replayed.view(), &VisualizationState::default());
			let second = replayed.run(s, t).unwrap();
			for _ in 0..k {
				replayed.tick(delay);
			}

			let mut uninterrupted = delivery_state();
			uninterrupted.run(s, t).unwrap();
			for _ in 0..k {
				uninterrupted.tick(delay);
			}

			prop_assert!(!second.is_cancelled());
			prop_assert_eq!(replayed.view(), uninterrupted.view());
			prop_assert_eq!(replayed.summary(), uninterrupted.summary());
		}
	}
}
