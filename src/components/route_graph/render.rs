use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::graph::Graph;
use super::playback::VisualizationState;
use super::style::{
	DISTANCE_BADGE_OFFSET, DISTANCE_BADGE_RADIUS, NAME_OFFSET, NODE_RADIUS, Style,
	WEIGHT_LABEL_RADIUS,
};
use super::types::{EdgeKey, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRole {
	Path,
	Explored,
	Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	Start,
	End,
	Path,
	Default,
}

/// The nodes the user picked as route endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	pub source: Option<NodeId>,
	pub target: Option<NodeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSprite {
	pub key: EdgeKey,
	pub role: EdgeRole,
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub color: String,
	pub width: f64,
	pub glow: f64,
	pub label: String,
	pub label_ring: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeSprite {
	pub id: NodeId,
	pub role: NodeRole,
	pub center: (f64, f64),
	pub fill: String,
	pub glow: f64,
	pub name: String,
	pub distance: Option<String>,
}

/// A complete drawing, edges below nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub edges: Vec<EdgeSprite>,
	pub nodes: Vec<NodeSprite>,
	pub text: String,
	pub badge: String,
}

/// Maps graph and traversal state to a drawing. Pure; equal inputs give
/// equal scenes.
pub fn compose(
	graph: &Graph,
	view: &VisualizationState,
	style: &Style,
	selection: Selection,
	(width, height): (f64, f64),
) -> Scene {
	let path_edges = view.path.edge_keys();

	let edges = graph
		.edges()
		.iter()
		.filter_map(|link| {
			let (a, b) = (graph.node(link.from).ok()?, graph.node(link.to).ok()?);
			let key = graph.edge_key(link.from, link.to).ok()?;
			let role = if path_edges.contains(&key) {
				EdgeRole::Path
			} else if view.explored.contains(&key) {
				EdgeRole::Explored
			} else {
				EdgeRole::Default
			};
			let (color, width, glow, label_ring) = match role {
				EdgeRole::Path => (&style.path, 6.0, 10.0, &style.path),
				EdgeRole::Explored => (&style.exploration, 4.0, 8.0, &style.exploration),
				EdgeRole::Default => (&style.edge, 2.0, 0.0, &style.edge_label_ring),
			};
			Some(EdgeSprite {
				key,
				role,
				from: (a.x, a.y),
				to: (b.x, b.y),
				color: color.clone(),
				width,
				glow,
				label: link.weight.to_string(),
				label_ring: label_ring.clone(),
			})
		})
		.collect();

	let nodes = graph
		.nodes()
		.iter()
		.map(|node| {
			let role = if selection.source == Some(node.id) {
				NodeRole::Start
			} else if selection.target == Some(node.id) {
				NodeRole::End
			} else if view.path.contains(node.id) {
				NodeRole::Path
			} else {
				NodeRole::Default
			};
			let (fill, glow) = match role {
				NodeRole::Start => (&style.start, 15.0),
				NodeRole::End => (&style.end, 15.0),
				NodeRole::Path => (&style.path, 10.0),
				NodeRole::Default => (&style.node, 5.0),
			};
			NodeSprite {
				id: node.id,
				role,
				center: (node.x, node.y),
				fill: fill.clone(),
				glow,
				name: node.name.clone(),
				distance: view.distance(node.id).map(|d| d.to_string()),
			}
		})
		.collect();

	Scene {
		width,
		height,
		edges,
		nodes,
		text: style.text.clone(),
		badge: style.node.clone(),
	}
}

/// Draws a scene onto a 2D canvas context, replacing whatever was there.
pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
	for edge in &scene.edges {
		draw_edge(scene, edge, ctx);
	}
	for node in &scene.nodes {
		draw_node(scene, node, ctx);
	}
}

fn draw_edge(scene: &Scene, edge: &EdgeSprite, ctx: &CanvasRenderingContext2d) {
	let ((x1, y1), (x2, y2)) = (edge.from, edge.to);
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.set_stroke_style_str(&edge.color);
	ctx.set_line_width(edge.width);
	ctx.set_shadow_color(&edge.color);
	ctx.set_shadow_blur(edge.glow);
	ctx.stroke();
	ctx.set_shadow_blur(0.0);

	let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
	ctx.begin_path();
	let _ = ctx.arc(mx, my, WEIGHT_LABEL_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("#fff");
	ctx.fill();
	ctx.set_stroke_style_str(&edge.label_ring);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str(&scene.text);
	ctx.set_font("bold 12px Arial");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&edge.label, mx, my);
}

fn draw_node(scene: &Scene, node: &NodeSprite, ctx: &CanvasRenderingContext2d) {
	let (x, y) = node.center;
	ctx.begin_path();
	let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.fill);
	ctx.set_shadow_color(&node.fill);
	ctx.set_shadow_blur(node.glow);
	ctx.fill();
	ctx.set_shadow_blur(0.0);

	ctx.set_stroke_style_str("#fff");
	ctx.set_line_width(3.0);
	ctx.stroke();

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str("#fff");
	ctx.set_font("bold 12px Arial");
	let _ = ctx.fill_text(&node.id.to_string(), x, y);

	ctx.set_fill_style_str(&scene.text);
	ctx.set_font("14px Arial");
	let _ = ctx.fill_text(&node.name, x, y + NAME_OFFSET);

	let Some(label) = &node.distance else {
		return;
	};
	let (bx, by) = (x + DISTANCE_BADGE_OFFSET, y - DISTANCE_BADGE_OFFSET);
	ctx.begin_path();
	let _ = ctx.arc(bx, by, DISTANCE_BADGE_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("#fff");
	ctx.fill();
	ctx.set_stroke_style_str(&scene.badge);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str(&scene.badge);
	ctx.set_font("bold 10px Arial");
	let _ = ctx.fill_text(label, bx, by);
}
