/// Colors offered by the palette picker.
pub const PALETTE: &[&str] = &[
	"#fbbf24", "#f59e0b", "#f97316", "#ef4444", "#ec4899", "#a855f7", "#8b5cf6", "#6366f1",
	"#3b82f6", "#06b6d4", "#10b981", "#22c55e", "#84cc16",
];

pub const NODE_RADIUS: f64 = 25.0;
pub const WEIGHT_LABEL_RADIUS: f64 = 12.0;
pub const DISTANCE_BADGE_RADIUS: f64 = 15.0;
pub const DISTANCE_BADGE_OFFSET: f64 = 20.0;
pub const NAME_OFFSET: f64 = 45.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
	pub exploration: String,
	pub path: String,
	pub start: String,
	pub end: String,
	pub node: String,
	pub edge: String,
	pub edge_label_ring: String,
	pub text: String,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			exploration: "#fbbf24".into(),
			path: "#10b981".into(),
			start: "#10b981".into(),
			end: "#ef4444".into(),
			node: "#6366f1".into(),
			edge: "#e5e7eb".into(),
			edge_label_ring: "#d1d5db".into(),
			text: "#374151".into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackConfig {
	/// Seconds between two applied steps.
	pub step_delay: f64,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self { step_delay: 0.5 }
	}
}
