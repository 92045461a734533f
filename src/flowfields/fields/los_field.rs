//! The line-of-sight field records, per cell, whether the target is reachable by a conservative
//! notion of sight and whether the cell sits on a shadow line cast from an obstacle's edge. It
//! is produced by a modified BFS wavefront combined with Bresenham-traced shadow casting, and it
//! propagates seamlessly across chunk boundaries via [LosField::build_continuation].
//!

use crate::prelude::*;

/// Per-cell visibility and shadow-blocker bits for one chunk.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone)]
pub struct LosField {
	chunk: ChunkCoord,
	visible: [[bool; FIELD_RES_C]; FIELD_RES_R],
	wavefront_blocked: [[bool; FIELD_RES_C]; FIELD_RES_R],
}

impl LosField {
	/// A zero-initialised field describing `chunk`: nothing visible, nothing blocked.
	pub fn new(chunk: ChunkCoord) -> Self {
		LosField {
			chunk,
			visible: [[false; FIELD_RES_C]; FIELD_RES_R],
			wavefront_blocked: [[false; FIELD_RES_C]; FIELD_RES_R],
		}
	}
	/// The chunk this field describes
	pub fn chunk(&self) -> ChunkCoord {
		self.chunk
	}
	/// Whether the target is conservatively visible from `cell`
	pub fn is_visible(&self, cell: FieldCell) -> bool {
		self.visible[cell.row()][cell.column()]
	}
	/// Whether `cell` lies on a shadow line cast from a LOS corner
	pub fn is_wavefront_blocked(&self, cell: FieldCell) -> bool {
		self.wavefront_blocked[cell.row()][cell.column()]
	}
	fn set_visible(&mut self, cell: FieldCell, value: bool) {
		self.visible[cell.row()][cell.column()] = value;
	}
	fn set_wavefront_blocked(&mut self, cell: FieldCell) {
		self.wavefront_blocked[cell.row()][cell.column()] = true;
	}
	/// LOS-pathing neighbours of `cell`: up to four cardinal neighbours, excluding any already
	/// marked [LosField::is_wavefront_blocked] on this field.
	fn los_neighbours(&self, cell: FieldCell) -> Vec<FieldCell> {
		Ordinal::get_cardinal_cell_neighbours(cell)
			.into_iter()
			.filter(|n| !self.is_wavefront_blocked(*n))
			.collect()
	}

	/// Build the LOS field for the destination chunk containing `target`. `target` must lie
	/// inside this chunk.
	pub fn build_destination<W: WorldGeometry>(
		chunk_coord: ChunkCoord,
		chunk: &NavChunk,
		target: FieldCell,
		world: &W,
		map_pos: MapPos,
	) -> Self {
		let mut field = LosField::new(chunk_coord);
		let mut queue = IndexedPriorityQueue::new();
		let mut integration = [[f32::INFINITY; FIELD_RES_C]; FIELD_RES_R];
		integration[target.row()][target.column()] = 0.0;
		field.set_visible(target, true);
		queue.push(target, 0.0);
		debug!(target: "flow_field", chunk = ?chunk_coord, "building destination LOS field");
		field.propagate(chunk, &mut integration, &mut queue, world, map_pos, target_desc(chunk_coord, target));
		field.pad_wavefront();
		field
	}

	/// Build the LOS field for a chunk that is not the destination, continuing from
	/// `prev`, the already-built LOS field of the chunk adjacent to `chunk_coord` in the
	/// direction opposite of `prev.chunk()`.
	#[allow(clippy::too_many_arguments)]
	pub fn build_continuation<W: WorldGeometry>(
		chunk_coord: ChunkCoord,
		chunk: &NavChunk,
		prev: &LosField,
		world: &W,
		map_pos: MapPos,
		target: (ChunkCoord, FieldCell),
	) -> Self {
		let direction = Ordinal::chunk_to_chunk_direction(prev.chunk(), chunk_coord)
			.expect("LOS continuation requires adjacent chunks");
		let mut field = LosField::new(chunk_coord);
		let mut queue = IndexedPriorityQueue::new();
		let mut integration = [[f32::INFINITY; FIELD_RES_C]; FIELD_RES_R];

		let edge_len = match direction {
			Ordinal::North | Ordinal::South => FIELD_RES_C,
			Ordinal::West | Ordinal::East => FIELD_RES_R,
			_ => unreachable!("chunk_to_chunk_direction only returns a cardinal"),
		};
		for i in 0..edge_len {
			// prev is north of us: prev's last row becomes our first row, mirrored for the
			// other three directions.
			let (prev_cell, this_cell) = match direction {
				Ordinal::North => (FieldCell::new(FIELD_RES_R - 1, i), FieldCell::new(0, i)),
				Ordinal::South => (FieldCell::new(0, i), FieldCell::new(FIELD_RES_R - 1, i)),
				Ordinal::West => (FieldCell::new(i, FIELD_RES_C - 1), FieldCell::new(i, 0)),
				Ordinal::East => (FieldCell::new(i, 0), FieldCell::new(i, FIELD_RES_C - 1)),
				_ => unreachable!("chunk_to_chunk_direction only returns a cardinal"),
			};
			if prev.is_wavefront_blocked(prev_cell) {
				field.cast_shadow_from(this_cell, target, world, map_pos);
			}
			if prev.is_visible(prev_cell) {
				field.set_visible(this_cell, true);
				integration[this_cell.row()][this_cell.column()] = 0.0;
				queue.push(this_cell, 0.0);
			}
		}
		debug!(target: "flow_field", chunk = ?chunk_coord, from = ?prev.chunk(), "continuing LOS field across chunk boundary");
		field.propagate(chunk, &mut integration, &mut queue, world, map_pos, target);
		field.pad_wavefront();
		field
	}

	fn propagate<W: WorldGeometry>(
		&mut self,
		chunk: &NavChunk,
		integration: &mut [[f32; FIELD_RES_C]; FIELD_RES_R],
		queue: &mut IndexedPriorityQueue,
		world: &W,
		map_pos: MapPos,
		target: (ChunkCoord, FieldCell),
	) {
		while let Some(popped) = queue.pop() {
			let curr = popped.cell;
			let curr_cost = integration[curr.row()][curr.column()];
			for neighbour in self.los_neighbours(curr) {
				if chunk.get_grid_value(neighbour) > 1 {
					if is_los_corner(chunk, neighbour) {
						self.cast_shadow_from(neighbour, target, world, map_pos);
					}
					continue;
				}
				let new_cost = curr_cost + 1.0;
				if new_cost < integration[neighbour.row()][neighbour.column()] {
					integration[neighbour.row()][neighbour.column()] = new_cost;
					self.set_visible(neighbour, true);
					if !queue.contains(neighbour) {
						queue.push(neighbour, new_cost);
					}
				}
			}
		}
	}

	/// Cast a shadow line from `corner` away from `target`, marking every visited cell of this
	/// chunk [LosField::is_wavefront_blocked].
	fn cast_shadow_from<W: WorldGeometry>(
		&mut self,
		corner: FieldCell,
		target: (ChunkCoord, FieldCell),
		world: &W,
		map_pos: MapPos,
	) {
		let corner_bounds = world.tile_bounds(map_pos, TileDesc::new(self.chunk, corner.row(), corner.column()));
		let target_bounds = world.tile_bounds(map_pos, TileDesc::new(target.0, target.1.row(), target.1.column()));
		let corner_centre = corner_bounds.centre();
		let target_centre = target_bounds.centre();
		let dx = target_centre.0 - corner_centre.0;
		let dz = target_centre.1 - corner_centre.1;
		let len = (dx * dx + dz * dz).sqrt();
		if len == 0.0 {
			return;
		}
		let slope_x = dx / len;
		let slope_z = dz / len;
		let sx: i32 = if slope_x > 0.0 { 1 } else if slope_x < 0.0 { -1 } else { 0 };
		let sy: i32 = if -slope_z > 0.0 { 1 } else if -slope_z < 0.0 { -1 } else { 0 };
		let dx1000 = (slope_x.abs() * 1000.0).round() as i32;
		let dz1000 = (slope_z.abs() * 1000.0).round() as i32;
		let mut r = corner.row() as i32;
		let mut c = corner.column() as i32;
		let mut err = dx1000 - dz1000;
		loop {
			if r < 0 || r >= FIELD_RES_R as i32 || c < 0 || c >= FIELD_RES_C as i32 {
				break;
			}
			self.set_wavefront_blocked(FieldCell::new(r as usize, c as usize));
			let e2 = 2 * err;
			if e2 >= -dz1000 {
				err -= dz1000;
				c += sx;
			}
			if e2 <= dx1000 {
				err += dx1000;
				r += sy;
			}
			if sx == 0 && sy == 0 {
				break;
			}
		}
	}

	/// Clear visibility on every wavefront-blocked cell and its Moore neighbourhood.
	fn pad_wavefront(&mut self) {
		let blocked: Vec<FieldCell> = (0..FIELD_RES_R)
			.flat_map(|r| (0..FIELD_RES_C).map(move |c| (r, c)))
			.filter(|&(r, c)| self.wavefront_blocked[r][c])
			.map(|(r, c)| FieldCell::new(r, c))
			.collect();
		for cell in blocked {
			self.set_visible(cell, false);
			for dr in -1i32..=1 {
				for dc in -1i32..=1 {
					let r = cell.row() as i32 + dr;
					let c = cell.column() as i32 + dc;
					if r < 0 || r >= FIELD_RES_R as i32 || c < 0 || c >= FIELD_RES_C as i32 {
						continue;
					}
					self.set_visible(FieldCell::new(r as usize, c as usize), false);
				}
			}
		}
	}
}

/// A cell is a LOS corner iff exactly one of its vertical cardinal neighbours is impassable xor
/// exactly one of its horizontal cardinal neighbours is. Boundary-adjacent cells are skipped on
/// the axis that has no second neighbour.
fn is_los_corner(chunk: &NavChunk, cell: FieldCell) -> bool {
	let vertical = axis_transition(chunk, cell, Ordinal::North, Ordinal::South);
	let horizontal = axis_transition(chunk, cell, Ordinal::East, Ordinal::West);
	vertical ^ horizontal
}

fn axis_transition(chunk: &NavChunk, cell: FieldCell, a: Ordinal, b: Ordinal) -> bool {
	let a_blocked = Ordinal::step(cell, a).map(|n| !chunk.is_passable(n));
	let b_blocked = Ordinal::step(cell, b).map(|n| !chunk.is_passable(n));
	match (a_blocked, b_blocked) {
		(Some(a), Some(b)) => a ^ b,
		_ => false,
	}
}

fn target_desc(chunk: ChunkCoord, cell: FieldCell) -> (ChunkCoord, FieldCell) {
	(chunk, cell)
}

</content>
