use std::rc::Rc;

use leptos::prelude::*;
use log::error;

use crate::components::help_overlay::HelpOverlayPanel;
use crate::components::trust_graph::TrustGraphCanvas;
use crate::components::window::WindowResize;
use crate::config::VisualConfig;
use crate::encoding::EncodingRegistry;
use crate::graph::{InteractionRecord, PeerRecord, TrustDataset};
use crate::resize::ResizeSignal;

const VISUAL_CONFIG: &str = include_str!("../../assets/visual.json");

/// Loads the bundled look, falling back to the built-in defaults.
fn load_config() -> VisualConfig {
	VisualConfig::from_json(VISUAL_CONFIG).unwrap_or_else(|err| {
		error!("bundled visual config rejected, using defaults: {}", err);
		VisualConfig::default()
	})
}

/// Generate a sample trust snapshot (random tree around our own peer).
fn generate_sample_data(n: usize) -> TrustDataset {
	let key = |i: usize| format!("{:016x}", (i as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15));

	let peers: Vec<PeerRecord> = (0..n)
		.map(|i| PeerRecord {
			id: key(i),
			balance: rand_simple(i * 7 + 3),
		})
		.collect();

	let edges: Vec<InteractionRecord> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			InteractionRecord {
				a: key(i),
				b: key(target),
				volume_rank: (rand_simple(i * 13 + 5) * 1000.0).round(),
				split_ratio: rand_simple(i * 31 + 11),
			}
		})
		.collect();

	TrustDataset { peers, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let registry = Rc::new(EncodingRegistry::new(load_config()));
	let resize = ResizeSignal::new();

	// one window listener feeds every resize subscriber on the page
	let window_resize = WindowResize::attach(resize.clone());
	Effect::new(move |_| {
		let _alive = &window_resize;
	});

	let trust_data = Signal::derive(move || generate_sample_data(60));

	view! {
		<div class="fullscreen-graph">
			<TrustGraphCanvas
				data=trust_data
				registry=registry.clone()
				resize=resize.clone()
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"Trust Graph"</h1>
				<p class="subtitle">
					"Drag peers to pin them, double-click to release. Scroll to zoom. Drag background to pan."
				</p>
			</div>
			<HelpOverlayPanel registry=registry resize=resize />
		</div>
	}
}
