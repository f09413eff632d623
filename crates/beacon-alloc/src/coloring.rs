//! Single-pass greedy coloring.
//!
//! Vertices are decided one at a time in the supplied order. Each takes the
//! earliest palette channel not already committed to a decided neighbor:
//!
//! ```text
//! used(v)    = { channel(u) : u ∈ N(v), u decided, u assigned }
//! channel(v) = min_pref(palette \ used(v))   or   Unassignable
//! ```
//!
//! A decision is final. An unassignable vertex commits nothing, so it never
//! blocks a channel for the vertices after it.
//!
//! # Success Bound
//!
//! If every vertex has fewer decided neighbors than the palette has channels
//! when its turn comes, some channel is always free and nothing fails.

use crate::error::{Error, Result};
use crate::graph::InterferenceGraph;
use crate::ordering::is_permutation;
use crate::palette::{Channel, Palette};
use tracing::{trace, warn};

/// The decision for one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "channel", rename_all = "snake_case"))]
pub enum Outcome {
    /// A channel from the palette was committed.
    Assigned(Channel),
    /// Every palette channel was taken by a decided neighbor.
    Unassignable,
}

impl Outcome {
    /// The assigned channel, if any.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Outcome::Assigned(c) => Some(*c),
            Outcome::Unassignable => None,
        }
    }

    /// True if a channel was assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Outcome::Assigned(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Assigned(c) => write!(f, "{}", c),
            Outcome::Unassignable => f.write_str("unassignable"),
        }
    }
}

/// Progress of a vertex during the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pending,
    /// Index into the palette
    Assigned(usize),
    Unassignable,
}

/// Color `graph` greedily, visiting vertices in `order`.
///
/// Returns one outcome per vertex, indexed like the graph. Fails only if the
/// graph or the order is structurally inconsistent.
pub fn color_greedy(
    graph: &InterferenceGraph,
    order: &[usize],
    palette: &Palette,
) -> Result<Vec<Outcome>> {
    graph.check_invariants()?;
    if !is_permutation(order, graph.len()) {
        return Err(Error::InvariantViolation(format!(
            "processing order is not a permutation of {} vertices",
            graph.len()
        )));
    }

    let channels = palette.channels();
    let mut slots = vec![Slot::Pending; graph.len()];
    let mut taken = vec![false; channels.len()];

    for &v in order {
        taken.iter_mut().for_each(|t| *t = false);
        for &u in graph.neighbors(v) {
            if let Slot::Assigned(rank) = slots[u] {
                taken[rank] = true;
            }
        }

        slots[v] = match taken.iter().position(|&t| !t) {
            Some(rank) => {
                trace!(vertex = v, channel = channels[rank].value(), "assigned");
                Slot::Assigned(rank)
            }
            None => {
                warn!(vertex = v, degree = graph.degree(v), "palette exhausted");
                Slot::Unassignable
            }
        };
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(v, slot)| match slot {
            Slot::Assigned(rank) => Ok(Outcome::Assigned(channels[rank])),
            Slot::Unassignable => Ok(Outcome::Unassignable),
            Slot::Pending => Err(Error::InvariantViolation(format!(
                "vertex {} was never visited",
                v
            ))),
        })
        .collect()
}

/// Check that no two adjacent vertices share an assigned channel.
///
/// False if `outcomes` does not hold exactly one entry per vertex.
pub fn is_proper(graph: &InterferenceGraph, outcomes: &[Outcome]) -> bool {
    if outcomes.len() != graph.len() {
        return false;
    }
    graph.edges().all(|(a, b)| match (outcomes[a], outcomes[b]) {
        (Outcome::Assigned(x), Outcome::Assigned(y)) => x != y,
        _ => true,
    })
}
