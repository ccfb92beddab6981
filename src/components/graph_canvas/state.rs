use std::collections::HashMap;

use crate::graph::elements::{Position, RenderElement};

pub const NODE_RADIUS: f64 = 5.0;

/// A node resolved for drawing.
#[derive(Clone, Debug)]
pub struct PlacedNode {
	pub label: String,
	pub color: String,
	pub x: f64,
	pub y: f64,
}

/// An edge with endpoint geometry resolved from the node positions.
#[derive(Clone, Debug)]
pub struct PlacedEdge {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct CanvasState {
	pub nodes: Vec<PlacedNode>,
	pub edges: Vec<PlacedEdge>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			// start with a small margin so the grid origin is not clipped
			transform: ViewTransform {
				x: 50.0,
				y: 50.0,
				k: 1.0,
			},
			pan: PanState::default(),
			width,
			height,
		}
	}

	/// Replace the drawn content with a new element list. Edges carry no
	/// position of their own; endpoints are looked up among the node
	/// elements, and an edge whose endpoint is missing is not drawn.
	pub fn set_elements(&mut self, elements: &[RenderElement]) {
		let mut positions: HashMap<&str, Position> = HashMap::new();

		self.nodes.clear();
		for element in elements {
			if let RenderElement::Node {
				id,
				label,
				position,
				style,
			} = element
			{
				positions.insert(id, *position);
				self.nodes.push(PlacedNode {
					label: label.clone(),
					color: style.background_color.clone(),
					x: position.x,
					y: position.y,
				});
			}
		}

		self.edges.clear();
		for element in elements {
			if let RenderElement::Edge {
				source,
				target,
				label,
			} = element
			{
				if let (Some(from), Some(to)) =
					(positions.get(source.as_str()), positions.get(target.as_str()))
				{
					self.edges.push(PlacedEdge {
						x1: from.x,
						y1: from.y,
						x2: to.x,
						y2: to.y,
						label: label.clone(),
					});
				}
			}
		}
	}
}
