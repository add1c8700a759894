use std::cell::RefCell;
use std::rc::Rc;

use trust_graph_canvas::config::VisualConfig;
use trust_graph_canvas::encoding::{EncodingRegistry, SplitEdge};
use trust_graph_canvas::error::DataError;
use trust_graph_canvas::graph::{GraphRenderer, TrustDataset};
use trust_graph_canvas::legend::{HelpOverlay, LegendGroup, Visibility};
use trust_graph_canvas::resize::ResizeSignal;

const SNAPSHOT: &str = r#"{
	"peers": [
		{"id": "a1b2c3d4", "balance": 0.1},
		{"id": "e5f60718", "balance": 0.5},
		{"id": "9a8b7c6d", "balance": 0.9}
	],
	"edges": [
		{"a": "a1b2c3d4", "b": "e5f60718", "volumeRank": 12, "splitRatio": 0.25},
		{"a": "e5f60718", "b": "9a8b7c6d", "volumeRank": 40, "splitRatio": 0.75}
	]
}"#;

fn shared_registry() -> Rc<EncodingRegistry> {
	let config = VisualConfig::from_json(
		r##"{"node": {"color": {"range": ["#000000", "#ff8040"]}}, "graph": {"rankBy": "balance"}}"##,
	)
	.unwrap();
	Rc::new(EncodingRegistry::new(config))
}

#[test]
fn legend_and_graph_share_one_registry() {
	let registry = shared_registry();
	let mut graph = GraphRenderer::new(registry.clone());
	let legend = HelpOverlay::new(registry.clone(), ());

	assert!(Rc::ptr_eq(graph.registry(), legend.registry()));
	assert_eq!(legend.registry().node_color(0.5), graph.node_color(0.5));

	let scene = graph.render(&TrustDataset::from_json(SNAPSHOT).unwrap()).unwrap();
	let mid_peer = scene.circles().nth(1).map(|(_, _, c)| c);

	let text_sample = legend.draw(LegendGroup::TextInCircle);
	let mid_sample = text_sample.circles().next().map(|(_, _, c)| c);
	assert_eq!(mid_peer, mid_sample);
}

#[test]
fn legend_size_row_matches_graph_radii() {
	let registry = shared_registry();
	let mut graph = GraphRenderer::new(registry.clone());
	let legend = HelpOverlay::new(registry, ());

	let graph_radii: Vec<f64> = graph
		.render(&TrustDataset::from_json(SNAPSHOT).unwrap())
		.unwrap()
		.circles()
		.map(|(_, r, _)| r)
		.collect();
	let legend_radii: Vec<f64> = legend.draw(LegendGroup::Size).circles().map(|(_, r, _)| r).collect();

	// three ranked peers fall on the first, middle and last of five samples
	assert_eq!(graph_radii, vec![5.0, 15.0, 25.0]);
	assert_eq!(legend_radii[0], graph_radii[0]);
	assert_eq!(legend_radii[2], graph_radii[1]);
	assert_eq!(legend_radii[4], graph_radii[2]);
}

#[test]
fn quarter_split_scenario() {
	let edge = SplitEdge::new(100.0, 0.25, 4.0);
	assert_eq!((edge.given.start, edge.given.end), (0.0, 23.0));
	assert_eq!((edge.taken.start, edge.taken.end), (27.0, 100.0));
}

#[test]
fn radius_scenario() {
	let registry = EncodingRegistry::default();
	let radii: Vec<f64> = (0..5).map(|rank| registry.node_radius(rank, 5)).collect();
	assert_eq!(radii, vec![5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn missing_endpoint_raises_data_error() {
	let mut graph = GraphRenderer::new(shared_registry());
	let data = TrustDataset::from_json(
		r#"{"peers": [{"id": "X", "balance": 0.3}], "edges": [{"a": "X", "b": "Y", "volumeRank": 1, "splitRatio": 0.5}]}"#,
	)
	.unwrap();

	match graph.render(&data) {
		Err(DataError::DanglingEdge { missing, .. }) => assert_eq!(missing, "Y"),
		other => panic!("expected a dangling edge, got {:?}", other.map(|s| s.clone())),
	}
	assert!(graph.scene().is_empty());
}

#[test]
fn narrow_window_hides_visible_overlay() {
	let resize = ResizeSignal::new();
	let overlay = Rc::new(RefCell::new(HelpOverlay::new(shared_registry(), ())));
	let _subscription = HelpOverlay::subscribe(&overlay, &resize);

	overlay.borrow_mut().show();
	resize.emit(1024.0);
	assert_eq!(overlay.borrow().visibility(), Visibility::Visible);

	resize.emit(640.0);
	assert_eq!(overlay.borrow().visibility(), Visibility::Hidden);

	resize.emit(1024.0);
	assert_eq!(overlay.borrow().visibility(), Visibility::Hidden);
}
