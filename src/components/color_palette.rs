use leptos::prelude::*;

use super::route_graph::PALETTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Exploration,
	Path,
}

fn tab_class(active: bool) -> &'static str {
	if active { "tab active" } else { "tab" }
}

/// Palette picker for the exploration and path colors.
#[component]
pub fn ColorPalette(exploration: RwSignal<String>, path: RwSignal<String>) -> impl IntoView {
	let tab = RwSignal::new(Tab::Exploration);
	let active = move || match tab.get() {
		Tab::Exploration => exploration,
		Tab::Path => path,
	};

	view! {
		<div class="color-palette">
			<h3>"Customize Path Colors"</h3>
			<p class="hint">"Select colors for path exploration and shortest path visualization"</p>

			<div class="tabs">
				<button
					class=move || tab_class(tab.get() == Tab::Exploration)
					on:click=move |_| tab.set(Tab::Exploration)
				>
					"Exploration Path"
				</button>
				<button
					class=move || tab_class(tab.get() == Tab::Path)
					on:click=move |_| tab.set(Tab::Path)
				>
					"Shortest Path"
				</button>
			</div>

			<div class="swatches">
				{PALETTE
					.iter()
					.map(|&color| {
						view! {
							<button
								class=move || {
									if active().get() == color { "swatch selected" } else { "swatch" }
								}
								style=format!("background-color: {}", color)
								title=color
								on:click=move |_| active().set(color.to_string())
							/>
						}
					})
					.collect_view()}
			</div>

			<div class="current-colors">
				<div class="current">
					<span>"Exploration Color"</span>
					<div class="chip" style=move || format!("background-color: {}", exploration.get()) />
					<code>{move || exploration.get()}</code>
				</div>
				<div class="current">
					<span>"Path Color"</span>
					<div class="chip" style=move || format!("background-color: {}", path.get()) />
					<code>{move || path.get()}</code>
				</div>
			</div>
		</div>
	}
}
