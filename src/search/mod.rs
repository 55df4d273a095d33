//! Exhaustive template search over a decoded reference image.
//!
//! The coordinator enumerates every (template, scale, anchor) candidate,
//! the matcher tests candidates pixel-for-pixel, and the partition type
//! slices the enumeration across cooperating workers.

pub mod channels;
pub mod config;
pub mod coordinator;
pub mod matcher;
pub mod partition;
pub mod types;


pub use config::SearchConfig;
pub use coordinator::SearchCoordinator;
pub use matcher::matches_at;
pub use partition::WorkerPartition;
pub use types::{MatchResult, Template, template_id_from_name};
