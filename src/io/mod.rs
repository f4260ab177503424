//! TSPLIB instance loading and tour file output.
//!
//! - [`tsplib`] — Decodes a TSPLIB-style text description into a dimension
//!   and a fully populated symmetric distance matrix
//! - [`writer`] — Persists a solved tour in the `.tour` text format

pub mod tsplib;
pub mod writer;

pub use tsplib::{load_instance, parse_instance, EdgeWeightType, ParseError, TsplibInstance};
pub use writer::{tour_file_path, write_tour_file};
