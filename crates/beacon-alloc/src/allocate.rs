//! The allocation entry point.
//!
//! [`allocate`] validates its inputs, builds the interference graph, orders
//! vertices by degree and colors them greedily. Each call is self-contained.

use crate::coloring::{color_greedy, Outcome};
use crate::error::{Error, Result};
use crate::graph::InterferenceGraph;
use crate::node::Node;
use crate::ordering::degree_order;
use crate::palette::{Channel, Palette};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, info, info_span};

/// Default interference radius in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 0.5;

/// Parameters of one allocation call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocConfig {
    /// Pairs strictly closer than this interfere
    pub interference_radius_km: f64,
    /// Channels in preference order
    pub palette: Palette,
}

impl AllocConfig {
    /// Create a validated configuration.
    pub fn new(interference_radius_km: f64, palette: Palette) -> Result<Self> {
        let config = Self {
            interference_radius_km,
            palette,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the radius is finite and strictly positive and the palette is usable.
    pub fn validate(&self) -> Result<()> {
        let r = self.interference_radius_km;
        if !(r.is_finite() && r > 0.0) {
            return Err(Error::InvalidRadius(r));
        }
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(())
    }
}

/// Per-node outcomes of an allocation, keyed by node identity.
///
/// Only [`allocate`] constructs one, so it serializes but never deserializes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Allocation {
    /// Identities in the order they were processed
    order: Vec<String>,
    outcomes: BTreeMap<String, Outcome>,
    summary: AllocationSummary,
}

/// Aggregate figures describing one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationSummary {
    /// Number of nodes
    pub nodes: usize,
    /// Number of interfering pairs
    pub edges: usize,
    /// Largest number of interferers of any node
    pub max_degree: usize,
    /// Channels available
    pub palette_size: usize,
    /// Distinct channels actually assigned
    pub channels_used: usize,
    /// Nodes left without a channel
    pub unassignable: usize,
}

impl Allocation {
    /// Outcome for a node, if the identity was part of the input.
    pub fn outcome(&self, id: &str) -> Option<Outcome> {
        self.outcomes.get(id).copied()
    }

    /// Assigned channel for a node, if any.
    pub fn channel(&self, id: &str) -> Option<Channel> {
        self.outcome(id).and_then(|o| o.channel())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no node was allocated. Never true for a successful call.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if every node received a channel.
    pub fn is_complete(&self) -> bool {
        self.summary.unassignable == 0
    }

    /// `(id, outcome)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> + '_ {
        self.order
            .iter()
            .map(move |id| (id.as_str(), self.outcomes[id.as_str()]))
    }

    /// Identities in processing order.
    pub fn processing_order(&self) -> &[String] {
        &self.order
    }

    /// `(id, channel)` pairs for assigned nodes, in processing order.
    pub fn assigned(&self) -> impl Iterator<Item = (&str, Channel)> + '_ {
        self.iter().filter_map(|(id, o)| o.channel().map(|c| (id, c)))
    }

    /// Identities of unassignable nodes, in processing order.
    pub fn unassignable(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, o)| !o.is_assigned())
            .map(|(id, _)| id)
    }

    /// Distinct channels that were assigned, ascending.
    pub fn channels_used(&self) -> BTreeSet<Channel> {
        self.outcomes.values().filter_map(Outcome::channel).collect()
    }

    /// Outcomes keyed and sorted by identity.
    pub fn into_sorted(self) -> BTreeMap<String, Outcome> {
        self.outcomes
    }

    /// Aggregate figures.
    pub fn summary(&self) -> AllocationSummary {
        self.summary
    }
}

/// Check node identities and coordinates.
fn validate_nodes(nodes: &[Node]) -> Result<()> {
    if nodes.is_empty() {
        return Err(Error::EmptyNodeSet);
    }
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if node.id().is_empty() {
            return Err(Error::EmptyIdentity);
        }
        if !node.position().is_finite() {
            return Err(Error::NonFiniteCoordinate {
                id: node.id().to_string(),
                lat: node.lat(),
                lon: node.lon(),
            });
        }
        if !seen.insert(node.id()) {
            return Err(Error::DuplicateIdentity(node.id().to_string()));
        }
    }
    Ok(())
}

/// Assign a channel to every node such that no two nodes closer than the
/// interference radius share one.
///
/// Nodes that cannot be served by the palette are reported as
/// [`Outcome::Unassignable`]; that is not an error. Errors are returned for
/// invalid inputs and for internal invariant violations.
///
/// # Examples
///
/// ```
/// use beacon_alloc::{allocate, AllocConfig, Channel, Node, Palette};
///
/// let nodes = vec![
///     Node::new("A", 0.0, 0.0),
///     Node::new("B", 0.0, 0.001),
///     Node::new("C", 10.0, 10.0),
/// ];
/// let config = AllocConfig::new(0.5, Palette::new([1, 2, 3]).unwrap()).unwrap();
/// let allocation = allocate(&nodes, &config).unwrap();
///
/// assert_eq!(allocation.channel("C"), Some(Channel(1)));
/// assert_ne!(allocation.channel("A"), allocation.channel("B"));
/// ```
pub fn allocate(nodes: &[Node], config: &AllocConfig) -> Result<Allocation> {
    let span = info_span!("allocate", nodes = nodes.len(), radius_km = config.interference_radius_km);
    let _guard = span.enter();

    config.validate()?;
    validate_nodes(nodes)?;

    let graph = InterferenceGraph::build(nodes, config.interference_radius_km);
    let order = degree_order(&graph);
    debug!(first = ?order.first().map(|&v| nodes[v].id()), "processing order ready");

    let outcomes = color_greedy(&graph, &order, &config.palette)?;

    let by_id: BTreeMap<String, Outcome> = nodes
        .iter()
        .zip(&outcomes)
        .map(|(node, &outcome)| (node.id().to_string(), outcome))
        .collect();
    let processed: Vec<String> = order.iter().map(|&v| nodes[v].id().to_string()).collect();

    let channels_used = outcomes
        .iter()
        .filter_map(Outcome::channel)
        .collect::<BTreeSet<_>>()
        .len();
    let summary = AllocationSummary {
        nodes: nodes.len(),
        edges: graph.edge_count(),
        max_degree: graph.max_degree(),
        palette_size: config.palette.len(),
        channels_used,
        unassignable: outcomes.iter().filter(|o| !o.is_assigned()).count(),
    };

    info!(
        edges = summary.edges,
        channels_used = summary.channels_used,
        unassignable = summary.unassignable,
        "allocation complete"
    );

    Ok(Allocation {
        order: processed,
        outcomes: by_id,
        summary,
    })
}
