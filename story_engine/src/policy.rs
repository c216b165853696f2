//! Traversal policy - which edge to follow when leaving a node.

use rand::Rng;
use story_content::{ContentStore, EdgeRecord, EdgeSelector};

/// Choose the edge to follow for a node of kind `selector`.
///
/// - `auto`, `start`, `choice` and unrecognised kinds take the first edge.
/// - `random` draws uniformly among all edges.
/// - `end` is terminal even if edges exist.
///
/// `None` means the node has nowhere to go and the game is over.
pub fn choose_edge<'a, R: Rng + ?Sized>(
    selector: &EdgeSelector,
    edges: &[&'a EdgeRecord],
    rng: &mut R,
) -> Option<&'a EdgeRecord> {
    match selector {
        EdgeSelector::End => None,
        EdgeSelector::Random if !edges.is_empty() => {
            Some(edges[rng.random_range(0..edges.len())])
        }
        EdgeSelector::Random => None,
        // `choice` has no branching interaction yet and falls back to the first edge.
        EdgeSelector::Start | EdgeSelector::Auto | EdgeSelector::Choice | EdgeSelector::Other(_) => {
            edges.first().copied()
        }
    }
}

/// Edge selection bound to an injectable random source.
#[derive(Debug, Clone)]
pub struct TraversalPolicy<R> {
    rng: R,
}

impl<R: Rng> TraversalPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose among an explicit edge list.
    pub fn next_edge<'a>(
        &mut self,
        selector: &EdgeSelector,
        edges: &[&'a EdgeRecord],
    ) -> Option<&'a EdgeRecord> {
        choose_edge(selector, edges, &mut self.rng)
    }

    /// Choose the edge leaving `node`, using the store's selector and edge list.
    pub fn next_from<'a>(&mut self, store: &'a ContentStore, node: &str) -> Option<&'a EdgeRecord> {
        let selector = store.selector_of(node);
        if let EdgeSelector::Other(label) = &selector {
            tracing::warn!(node, selector = %label, "unrecognised edge selector, following first edge");
        }

        let edges = store.outgoing_edges(node);
        let chosen = self.next_edge(&selector, &edges);
        tracing::debug!(
            node,
            selector = %selector,
            options = edges.len(),
            next = chosen.map(|e| e.target.as_str()),
            "edge selected"
        );
        chosen
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}
