//! Vertex count and bounding box statistics for Wavefront OBJ files.
//!
//! This crate scans the leading block of geometric vertex records (`v x y z`)
//! of an OBJ file and reports how many there are together with the
//! axis-aligned box that contains them. Lines are processed one at a time,
//! so arbitrarily large files are handled in constant memory.
//!
//! # Examples
//!
//! ```
//! use obj_stat::accumulate;
//!
//! let stats = accumulate(["v 1.0 1.0 1.0", "f 1 2 3", "v 9.0 9.0 9.0"]).unwrap();
//!
//! // The scan ends at the face record
//! assert_eq!(stats.count(), 1);
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accumulator;
pub mod error;
pub mod record;
pub mod stats;

pub use accumulator::{
    Accumulator, ScanState, StopRecord, accumulate, accumulate_file, accumulate_reader, open_input,
};
pub use error::{ObjError, Result};
pub use record::{Record, VertexPoint};
pub use stats::{BoundingBoxStats, Bounds};
