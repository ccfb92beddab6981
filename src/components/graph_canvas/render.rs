use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, NODE_RADIUS};

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#f5f6fe");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);

	for edge in &state.edges {
		let (dx, dy) = (edge.x2 - edge.x1, edge.y2 - edge.y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.set_stroke_style_str("rgba(26, 26, 46, 0.6)");
		ctx.set_line_width(line_width);
		ctx.begin_path();
		ctx.move_to(edge.x1 + ux * NODE_RADIUS, edge.y1 + uy * NODE_RADIUS);
		ctx.line_to(
			edge.x2 - ux * (NODE_RADIUS + arrow_size),
			edge.y2 - uy * (NODE_RADIUS + arrow_size),
		);
		ctx.stroke();

		ctx.set_fill_style_str("rgba(26, 26, 46, 0.8)");
		let (tip_x, tip_y) = (edge.x2 - ux * NODE_RADIUS, edge.y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if !edge.label.is_empty() {
			let (mx, my) = ((edge.x1 + edge.x2) / 2.0, (edge.y1 + edge.y2) / 2.0);
			ctx.set_fill_style_str("rgba(26, 26, 46, 0.8)");
			ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
			let _ = ctx.fill_text(&edge.label, mx + 4.0 / k, my - 4.0 / k);
		}
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	for node in &state.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();

		ctx.set_fill_style_str("#1a1a2e");
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.label, node.x + NODE_RADIUS + 3.0, node.y + 3.0);
	}
}
