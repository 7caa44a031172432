//! # Analysis Module
//!
//! Pure transformations over the ordered match event stream.
//!
//! ## Submodules
//!
//! - `classifier` - Per-pass classification (progressive, key pass, assist)
//! - `network` - Team pass-network aggregation (nodes, edges, thresholds)

pub mod classifier;
pub mod network;

pub use classifier::{classify_passes, ClassifiedPass, PassType};
pub use network::{build_pass_network, PassEdge, PassNetwork, PlayerNode, TeamPassTotals};
