//! Renderer-facing element types and the remote-graph translation.

use std::collections::HashSet;

use serde_json::Value;

use super::layout;
use crate::api::{NodeRecord, RemoteGraph};

/// A point in the renderer's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal coordinate, renderer units.
	pub x: f64,
	/// Vertical coordinate, renderer units.
	pub y: f64,
}

/// Visual attributes of a node element.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	/// CSS color the node circle is filled with.
	pub background_color: String,
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			background_color: "blue".to_owned(),
		}
	}
}

/// One entry of the renderer's element list. Edges carry no position; the
/// renderer derives edge geometry from the endpoint nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderElement {
	/// A positioned, labeled node.
	Node {
		/// Node identifier, unique within the list.
		id: String,
		/// Text drawn beside the node.
		label: String,
		/// Grid position assigned by the layout engine.
		position: Position,
		/// Fill style.
		style: NodeStyle,
	},
	/// A labeled connection between two node ids.
	Edge {
		/// Id of the node the edge starts at.
		source: String,
		/// Id of the node the edge points to.
		target: String,
		/// Text drawn at the edge midpoint.
		label: String,
	},
}

impl RenderElement {
	fn node_id(&self) -> Option<&str> {
		match self {
			RenderElement::Node { id, .. } => Some(id),
			RenderElement::Edge { .. } => None,
		}
	}
}

/// Translate a fetched graph into a full element list: a node element for
/// every node in store order, positioned on the grid, then an edge element
/// for every link whose endpoints both exist. Links referencing an unknown
/// node are dropped rather than emitted dangling.
pub fn elements_from_graph(graph: &RemoteGraph) -> Vec<RenderElement> {
	let ids: Vec<String> = graph.nodes.iter().map(|n| n.id.clone()).collect();
	let positions = layout::grid_positions(&ids);
	let present: HashSet<&str> = ids.iter().map(String::as_str).collect();

	let mut elements: Vec<RenderElement> = ids
		.iter()
		.map(|id| RenderElement::Node {
			id: id.clone(),
			label: id.clone(),
			position: positions.get(id).copied().unwrap_or_default(),
			style: NodeStyle::default(),
		})
		.collect();

	for link in &graph.links {
		if present.contains(link.source.as_str()) && present.contains(link.target.as_str()) {
			elements.push(RenderElement::Edge {
				source: link.source.clone(),
				target: link.target.clone(),
				label: weight_label(link.weight.as_ref()),
			});
		}
	}
	elements
}

/// Merge a newly created node into an existing element list. The grid is
/// recomputed over [existing node ids in current order] + [new id], so
/// existing nodes may shift when the column count changes. Edge elements
/// pass through untouched, after the nodes.
///
/// `None` (the store failed to create the node) and an id that is already
/// displayed both return the list unchanged.
pub fn insert_node(current: &[RenderElement], created: Option<NodeRecord>) -> Vec<RenderElement> {
	let Some(created) = created else {
		return current.to_vec();
	};
	if current.iter().any(|e| e.node_id() == Some(&created.id)) {
		return current.to_vec();
	}

	let (mut nodes, edges): (Vec<_>, Vec<_>) = current
		.iter()
		.cloned()
		.partition(|e| matches!(e, RenderElement::Node { .. }));

	nodes.push(RenderElement::Node {
		label: created.id.clone(),
		id: created.id,
		position: Position::default(),
		style: NodeStyle::default(),
	});

	let ids: Vec<String> = nodes
		.iter()
		.filter_map(|e| e.node_id().map(str::to_owned))
		.collect();
	let positions = layout::grid_positions(&ids);
	for element in &mut nodes {
		if let RenderElement::Node { id, position, .. } = element {
			if let Some(p) = positions.get(id) {
				*position = *p;
			}
		}
	}

	nodes.extend(edges);
	nodes
}

/// The element list shown before any graph has loaded: the demo pair.
pub fn placeholder_elements() -> Vec<RenderElement> {
	vec![
		RenderElement::Node {
			id: "1".to_owned(),
			label: "Node A".to_owned(),
			position: Position { x: 600.0, y: 100.0 },
			style: NodeStyle::default(),
		},
		RenderElement::Node {
			id: "2".to_owned(),
			label: "Node B".to_owned(),
			position: Position { x: 550.0, y: 300.0 },
			style: NodeStyle {
				background_color: "red".to_owned(),
			},
		},
		RenderElement::Edge {
			source: "1".to_owned(),
			target: "2".to_owned(),
			label: "Edge from Node1 to Node2".to_owned(),
		},
	]
}

// String weights render unquoted; everything else keeps its JSON form.
fn weight_label(weight: Option<&Value>) -> String {
	match weight {
		None => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => other.to_string(),
	}
}
