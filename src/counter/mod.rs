//! Line classification for the size limits.

mod sloc;

pub use sloc::{LineKind, LineStats, SlocCounter};
