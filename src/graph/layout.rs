//! Deterministic grid placement for node identifiers.

use std::collections::HashMap;

use super::elements::Position;

/// Distance between adjacent grid cells, in renderer units.
pub const SPACING: f64 = 100.0;

/// Assign a grid position to every id in `ids`, in sequence order.
///
/// The grid is square-ish: `ceil(sqrt(N))` columns, filled row by row, so
/// the id at index `i` lands at `(i % cols * SPACING, i / cols * SPACING)`.
/// Two calls with the same sequence yield identical positions; reordering
/// the input moves every node. Nothing is remembered between calls.
pub fn grid_positions(ids: &[String]) -> HashMap<String, Position> {
	if ids.is_empty() {
		return HashMap::new();
	}
	let cols = (ids.len() as f64).sqrt().ceil() as usize;

	ids.iter()
		.enumerate()
		.map(|(i, id)| {
			let (row, col) = (i / cols, i % cols);
			(
				id.clone(),
				Position {
					x: col as f64 * SPACING,
					y: row as f64 * SPACING,
				},
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn ids(names: &[&str]) -> Vec<String> {
		names.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn empty_input_yields_empty_map() {
		assert_eq!(grid_positions(&[]), HashMap::new());
	}

	#[test]
	fn single_node_sits_at_origin() {
		let positions = grid_positions(&ids(&["A"]));
		assert_eq!(positions["A"], Position { x: 0.0, y: 0.0 });
	}

	#[test]
	fn three_nodes_wrap_after_two_columns() {
		let positions = grid_positions(&ids(&["A", "B", "C"]));
		assert_eq!(positions["A"], Position { x: 0.0, y: 0.0 });
		assert_eq!(positions["B"], Position { x: 100.0, y: 0.0 });
		assert_eq!(positions["C"], Position { x: 0.0, y: 100.0 });
	}

	#[test]
	fn four_nodes_fill_a_two_by_two_grid() {
		let positions = grid_positions(&ids(&["A", "B", "C", "D"]));
		assert_eq!(positions["D"], Position { x: 100.0, y: 100.0 });
	}

	#[test]
	fn positions_are_pairwise_distinct_and_bounded_by_column_count() {
		for n in 1..=40usize {
			let input: Vec<String> = (0..n).map(|i| i.to_string()).collect();
			let positions = grid_positions(&input);
			assert_eq!(positions.len(), n);

			let cols = (n as f64).sqrt().ceil() as usize;
			let mut cells: Vec<(i64, i64)> = positions
				.values()
				.map(|p| ((p.x / SPACING) as i64, (p.y / SPACING) as i64))
				.collect();
			cells.sort_unstable();
			cells.dedup();
			assert_eq!(cells.len(), n, "overlap with {n} nodes");

			let max_col = cells.iter().map(|&(c, _)| c).max().unwrap();
			assert!(max_col < cols as i64);
			if n > 1 {
				// the first row always reaches the last column
				assert_eq!(max_col + 1, cols as i64);
			}
		}
	}

	#[test]
	fn same_sequence_is_deterministic() {
		let input = ids(&["x", "y", "z", "w", "v"]);
		assert_eq!(grid_positions(&input), grid_positions(&input));
	}

	#[test]
	fn reordering_moves_nodes() {
		let forward = grid_positions(&ids(&["A", "B"]));
		let reversed = grid_positions(&ids(&["B", "A"]));
		assert_eq!(forward["A"], reversed["B"]);
		assert_eq!(forward["B"], reversed["A"]);
		assert_ne!(forward["A"], reversed["A"]);
	}
}
