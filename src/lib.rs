//! Exhaustive exact-match template search over uncompressed 24-bit bitmaps,
//! with integer template scaling and multi-worker partitioning.

pub mod args;
pub mod bitmap;
pub mod error;
pub mod raster;
pub mod search;

pub use error::{SearchError, SearchResult};
pub use raster::{Image, Pixel};
pub use search::{MatchResult, SearchConfig, SearchCoordinator, Template, WorkerPartition};
