//! The integration field is a grid of accumulated minimum costs from a set of seed cells,
//! produced by multi-source Dijkstra over a chunk's [NavChunk] cost grid. It's an ephemeral
//! field - it exists to be consumed by the flow field builder and is not itself cached.
//!

use crate::prelude::*;

/// A FIELD_RES_R x FIELD_RES_C array of accumulated costs. Unreachable cells hold `f32::INFINITY`;
/// seed cells hold `0.0`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone)]
pub struct IntegrationField([[f32; FIELD_RES_C]; FIELD_RES_R]);

impl Default for IntegrationField {
	fn default() -> Self {
		IntegrationField([[f32::INFINITY; FIELD_RES_C]; FIELD_RES_R])
	}
}

impl Field<f32> for IntegrationField {
	fn get_field(&self) -> &[[f32; FIELD_RES_C]; FIELD_RES_R] {
		&self.0
	}
	fn get_grid_value(&self, cell: FieldCell) -> f32 {
		self.0[cell.row()][cell.column()]
	}
	fn set_grid_value(&mut self, value: f32, cell: FieldCell) {
		self.0[cell.row()][cell.column()] = value;
	}
}

impl IntegrationField {
	/// Build a new integration field over `chunk`, seeded at every cell in `seeds` with key 0.
	/// Every seed must be distinct; duplicate seeds are harmless since relaxation is
	/// idempotent. Panics if `seeds` is empty - target resolution must produce at least one
	/// seed before calling this.
	pub fn build(chunk: &NavChunk, seeds: &[FieldCell]) -> Self {
		assert!(!seeds.is_empty(), "integration field requires at least one seed");
		let mut field = IntegrationField::default();
		let mut queue = IndexedPriorityQueue::new();
		for &seed in seeds {
			field.set_grid_value(0.0, seed);
			queue.push(seed, 0.0);
		}
		debug!(target: "flow_field", seed_count = seeds.len(), "building integration field");
		while let Some(popped) = queue.pop() {
			let curr = popped.cell;
			let curr_cost = field.get_grid_value(curr);
			for (neighbour, neighbour_cost) in chunk.pathing_neighbours(curr, true) {
				let tentative = curr_cost + neighbour_cost as f32;
				if tentative < field.get_grid_value(neighbour) {
					field.set_grid_value(tentative, neighbour);
					if !queue.contains(neighbour) {
						queue.push(neighbour, tentative);
					}
				}
			}
		}
		field
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn flat_field_manhattan_distance() {
		let chunk = NavChunk::default();
		let goal = FieldCell::new(4, 4);
		let field = IntegrationField::build(&chunk, &[goal]);
		for r in 0..FIELD_RES_R {
			for c in 0..FIELD_RES_C {
				let expected = (r as i32 - 4).abs() + (c as i32 - 4).abs();
				assert_eq!(field.get_grid_value(FieldCell::new(r, c)), expected as f32);
			}
		}
	}
	#[test]
	fn impassable_cells_remain_infinite() {
		let mut chunk = NavChunk::default();
		for c in 0..FIELD_RES_C {
			chunk.set_grid_value(COST_IMPASSABLE, FieldCell::new(4, c));
		}
		let field = IntegrationField::build(&chunk, &[FieldCell::new(9, 0)]);
		assert_eq!(field.get_grid_value(FieldCell::new(0, 0)), f32::INFINITY);
	}
	#[test]
	fn wall_with_gap_routes_through_it() {
		let mut chunk = NavChunk::default();
		for c in 0..FIELD_RES_C {
			if c != 3 {
				chunk.set_grid_value(COST_IMPASSABLE, FieldCell::new(4, c));
			}
		}
		let field = IntegrationField::build(&chunk, &[FieldCell::new(7, 3)]);
		// (0,0) -> (4,3) along the gap -> (7,3): 4 + 3 + 3 + 3 = 13
		assert_eq!(field.get_grid_value(FieldCell::new(0, 0)), 13.0);
	}
}
</content>
