use leptos::prelude::*;

use crate::components::color_palette::ColorPalette;
use crate::components::route_graph::{
	Command, Graph, NodeId, PALETTE, RouteGraphCanvas, RunSummary, Selection, Termination,
};
use crate::network::{DEFAULT_SOURCE, DEFAULT_TARGET, delivery_network};

/// A labelled dropdown over the network's nodes.
#[component]
fn NodeSelect(
	label: &'static str,
	options: Vec<(NodeId, String)>,
	value: RwSignal<NodeId>,
	#[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
	view! {
		<label class="control">
			<span>{label}</span>
			<select
				disabled=move || disabled.get()
				on:change=move |ev| {
					if let Ok(id) = event_target_value(&ev).parse::<NodeId>() {
						value.set(id);
					}
				}
			>
				{options
					.into_iter()
					.map(|(id, name)| {
						view! {
							<option value=id.to_string() selected=move || value.get() == id>
								{name}
							</option>
						}
					})
					.collect_view()}
			</select>
		</label>
	}
}

#[component]
fn RouteStats(summary: RwSignal<RunSummary>) -> impl IntoView {
	let distance = move || match summary.get().distance {
		Some(d) => d.to_string(),
		None => "unreachable".to_string(),
	};
	let outcome = move || match summary.get().termination {
		Some(Termination::ReachedTarget) => "Route found",
		Some(Termination::FrontierExhausted) => "No route: every reachable stop was explored",
		None => "",
	};

	view! {
		<div class="route-stats">
			<h3>"Route Statistics"</h3>
			<p class="outcome">{outcome}</p>
			<div class="stat">
				<div class="value">{move || summary.get().stops}</div>
				<div class="caption">"Stops"</div>
			</div>
			<div class="stat">
				<div class="value">{distance}</div>
				<div class="caption">"Total Distance"</div>
			</div>
			<div class="stat">
				<div class="value">{move || summary.get().explored}</div>
				<div class="caption">"Edges Explored"</div>
			</div>
		</div>
	}
}

#[component]
fn RoutePlanner(graph: Graph) -> impl IntoView {
	let options: Vec<(NodeId, String)> =
		graph.nodes().iter().map(|n| (n.id, n.name.clone())).collect();

	let source = RwSignal::new(DEFAULT_SOURCE);
	let target = RwSignal::new(DEFAULT_TARGET);
	let exploration = RwSignal::new(PALETTE[0].to_string());
	let path = RwSignal::new(PALETTE[10].to_string());
	let command = RwSignal::new(None::<Command>);
	let summary = RwSignal::new(RunSummary::default());

	let selection = Signal::derive(move || Selection {
		source: Some(source.get()),
		target: Some(target.get()),
	});
	let running = Signal::derive(move || summary.get().running);

	view! {
		<div class="controls">
			<NodeSelect label="Start:" options=options.clone() value=source disabled=running />
			<NodeSelect label="End:" options=options value=target disabled=running />
			<button
				class="run"
				disabled=move || running.get()
				on:click=move |_| command.set(Some(Command::Run))
			>
				{move || if running.get() { "Running..." } else { "Find Route" }}
			</button>
			<button class="reset" on:click=move |_| command.set(Some(Command::Reset))>
				"Reset"
			</button>
		</div>

		<div class="graph-card">
			<RouteGraphCanvas
				graph=graph
				selection=selection
				exploration_color=exploration
				path_color=path
				command=command
				summary=summary
			/>
		</div>

		<ColorPalette exploration=exploration path=path />

		<Show when=move || summary.get().termination.is_some()>
			<RouteStats summary=summary />
		</Show>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="route-planner">
				<header class="planner-header">
					<h1>"Food Delivery Optimizer"</h1>
					<p class="subtitle">
						"Watch Dijkstra's algorithm explore routes and highlight the shortest delivery path."
					</p>
				</header>
				{Graph::new(&delivery_network()).map(|graph| view! { <RoutePlanner graph=graph /> })}
			</div>
		</ErrorBoundary>
	}
}
