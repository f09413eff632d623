//! Beacon Channel Allocation
//!
//! Assigns channels from a small palette to geographically positioned nodes
//! so that no two nodes within the interference radius share a channel.
//!
//! # Model
//!
//! The problem is graph coloring:
//! - Nodes are vertices
//! - Pairs closer than the radius (great-circle distance) are edges
//! - Channels are colors
//!
//! # Pipeline
//!
//! 1. [`InterferenceGraph::build`] compares every unordered pair once
//! 2. [`degree_order`] sorts vertices by degree, ties in input order
//! 3. [`color_greedy`] gives each vertex the earliest free channel
//!
//! The pass never backtracks. A vertex whose neighbors already hold every
//! channel is reported as [`Outcome::Unassignable`] and the pass continues.

mod allocate;
mod coloring;
mod error;
mod geo;
mod graph;
mod node;
mod ordering;
mod palette;

pub use allocate::{allocate, AllocConfig, Allocation, AllocationSummary, DEFAULT_RADIUS_KM};
pub use coloring::{color_greedy, is_proper, Outcome};
pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use graph::InterferenceGraph;
pub use node::Node;
pub use ordering::{degree_order, is_permutation};
pub use palette::{Channel, Palette};
