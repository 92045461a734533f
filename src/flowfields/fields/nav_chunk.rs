//! A `NavChunk` holds the read-only per-cell navigation cost of one chunk: a base movement cost
//! and a count of dynamic blockers. Everything downstream (integration field, flow field, LOS
//! field) is derived from it; a `NavChunk` itself never changes as a result of building a field.
//!
//! An example chunk's base-cost layer may look:
//!
//! ```text
//!  ___________________________________________________________
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  | 255 | 255 | 255 | 255 | 255 |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |  1  |  1  | 255 | 255 |  1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! ```
//!

use crate::prelude::*;

/// Base movement cost of one chunk cell. `1` is the cheapest; [COST_IMPASSABLE] marks
/// unwalkable terrain; any other value is a harder-to-traverse cost such as a slope.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone)]
pub struct NavChunk {
	cost_base: [[u8; FIELD_RES_C]; FIELD_RES_R],
	#[cfg_attr(feature = "serde", serde(skip))]
	blockers: [[u16; FIELD_RES_C]; FIELD_RES_R],
}

impl Default for NavChunk {
	fn default() -> Self {
		NavChunk {
			cost_base: [[1; FIELD_RES_C]; FIELD_RES_R],
			blockers: [[0; FIELD_RES_C]; FIELD_RES_R],
		}
	}
}

impl Field<u8> for NavChunk {
	fn get_field(&self) -> &[[u8; FIELD_RES_C]; FIELD_RES_R] {
		&self.cost_base
	}
	/// NB: panics if out of bounds
	fn get_grid_value(&self, cell: FieldCell) -> u8 {
		self.cost_base[cell.row()][cell.column()]
	}
	/// NB: panics if out of bounds
	fn set_grid_value(&mut self, value: u8, cell: FieldCell) {
		self.cost_base[cell.row()][cell.column()] = value;
	}
}

impl NavChunk {
	/// Create a new [NavChunk] with every cell's base cost set to `cost`
	pub fn new_with_cost(cost: u8) -> Self {
		NavChunk {
			cost_base: [[cost; FIELD_RES_C]; FIELD_RES_R],
			blockers: [[0; FIELD_RES_C]; FIELD_RES_R],
		}
	}
	/// Number of dynamic obstructions currently occupying `cell`
	pub fn blockers(&self, cell: FieldCell) -> u16 {
		self.blockers[cell.row()][cell.column()]
	}
	/// Set the dynamic blocker count of `cell`
	pub fn set_blockers(&mut self, cell: FieldCell, count: u16) {
		self.blockers[cell.row()][cell.column()] = count;
	}
	/// Whether `cell` is passable: its base cost isn't [COST_IMPASSABLE] and it carries no
	/// dynamic blockers.
	pub fn is_passable(&self, cell: FieldCell) -> bool {
		self.get_grid_value(cell) != COST_IMPASSABLE && self.blockers(cell) == 0
	}
	/// The cost of stepping into `cell` as observed by a caller that does not pre-filter by
	/// passability: a blocked cell reports [COST_IMPASSABLE] regardless of its base cost.
	pub fn effective_cost(&self, cell: FieldCell) -> u8 {
		if self.blockers(cell) > 0 {
			COST_IMPASSABLE
		} else {
			self.get_grid_value(cell)
		}
	}
	/// Pathing neighbours of `cell`: the up-to-four cardinal neighbours inside the grid. When
	/// `only_passable` is set, cells that are impassable (see [NavChunk::is_passable]) are
	/// excluded. Returns a `(cell, cost)` pair per neighbour using [NavChunk::effective_cost].
	pub fn pathing_neighbours(&self, cell: FieldCell, only_passable: bool) -> Vec<(FieldCell, u8)> {
		let mut out = Vec::with_capacity(4);
		for n in Ordinal::get_cardinal_cell_neighbours(cell) {
			if only_passable && !self.is_passable(n) {
				continue;
			}
			out.push((n, self.effective_cost(n)));
		}
		assert!(out.len() <= 4);
		out
	}
	/// Deserialize a [NavChunk] from a RON document on disk.
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, NavChunkError> {
		let file = std::fs::File::open(path).map_err(|source| NavChunkError::Io {
			path: path.to_string(),
			source,
		})?;
		ron::de::from_reader(file).map_err(|source| NavChunkError::Deserialize {
			path: path.to_string(),
			source,
		})
	}
}

</content>
