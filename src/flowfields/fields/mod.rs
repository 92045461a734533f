//! The fields that make up a chunk's navigation data: the cost grid read from outside the
//! crate, the integration field and flow field built from it, and the independent LOS field.
//!

pub mod flow_field;
pub mod integration_field;
pub mod los_field;
pub mod nav_chunk;

use crate::prelude::*;

/// Defines required access to field arrays. Every fixed-size grid in this crate - the cost
/// grid, the integration field, the flow field, the LOS field - implements this uniformly so
/// builders can be written once against the trait rather than against each concrete array.
pub trait Field<T> {
	/// Get a reference to the field array
	fn get_field(&self) -> &[[T; FIELD_RES_C]; FIELD_RES_R];
	/// Retrieve a field cell value
	fn get_grid_value(&self, cell: FieldCell) -> T;
	/// Set a field cell to a value
	fn set_grid_value(&mut self, value: T, cell: FieldCell);
}
</content>
