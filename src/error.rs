//! Typed errors for the one genuinely recoverable boundary in this crate: loading a
//! [NavChunk](crate::flowfields::fields::nav_chunk::NavChunk)'s cost grid from a RON asset on
//! disk. Everything else in this crate is a programming-error invariant and panics instead, per
//! the same split the rest of this family of crates draws between I/O and internal logic.

use thiserror::Error;

/// Failure modes of [NavChunk::from_ron](crate::flowfields::fields::nav_chunk::NavChunk::from_ron).
#[derive(Debug, Error)]
pub enum NavChunkError {
	/// The asset path could not be opened
	#[error("failed opening nav chunk asset at {path}: {source}")]
	Io {
		/// path that was attempted
		path: String,
		/// underlying io error
		#[source]
		source: std::io::Error,
	},
	/// The file was opened but didn't deserialize into a valid cost grid
	#[cfg(feature = "ron")]
	#[error("failed deserializing nav chunk asset at {path}: {source}")]
	Deserialize {
		/// path that was attempted
		path: String,
		/// underlying ron error
		#[source]
		source: ron::error::SpannedError,
	},
}
</content>
