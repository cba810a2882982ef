//! Dijkstra shortest path over the station graph.
//!
//! Edges are undirected for routing. The result is a list of
//! [`TraveledEdge`] views, each labelled with the direction the route
//! actually crosses it, so the stored edges are never relabelled and
//! concurrent queries can't see each other's directions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::config::Weighting;
use super::graph::{EdgeId, Graph, StationId};
use crate::domain::{Connection, DurationJourney, EdgeTransport, Station};

/// A per-edge cost for shortest-path queries.
///
/// Weights must be non-negative; results for negative weights are
/// unspecified.
pub trait EdgeWeight {
    /// Returns the cost of traversing `edge`.
    fn weight(&self, edge: &EdgeTransport) -> f64;
}

impl EdgeWeight for Weighting {
    fn weight(&self, edge: &EdgeTransport) -> f64 {
        match self {
            Weighting::Distance => edge.distance(),
            Weighting::Duration => edge.duration().as_secs() as f64,
        }
    }
}

impl<F> EdgeWeight for F
where
    F: Fn(&EdgeTransport) -> f64,
{
    fn weight(&self, edge: &EdgeTransport) -> f64 {
        self(edge)
    }
}

/// A stored edge as crossed by one particular route.
///
/// `start_station` and `end_station` follow the direction of travel, which
/// may be the reverse of how the edge was supplied. The stations are the
/// network's own instances.
#[derive(Debug, Clone, Copy)]
pub struct TraveledEdge<'g> {
    id: EdgeId,
    edge: &'g EdgeTransport,
    start: &'g Station,
    end: &'g Station,
}

impl<'g> TraveledEdge<'g> {
    /// Returns the id of the underlying stored edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the underlying edge, labelled as it was supplied.
    pub fn edge(&self) -> &'g EdgeTransport {
        self.edge
    }

    /// Returns true if the route crosses the edge against its supplied direction.
    pub fn is_reversed(&self) -> bool {
        self.start != self.edge.start_station()
    }
}

impl Connection for TraveledEdge<'_> {
    fn start_station(&self) -> &Station {
        self.start
    }

    fn end_station(&self) -> &Station {
        self.end
    }

    fn distance(&self) -> f64 {
        self.edge.distance()
    }

    fn duration(&self) -> &DurationJourney {
        self.edge.duration()
    }

    fn line_name(&self) -> &str {
        self.edge.line_name()
    }
}

/// Priority queue entry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    station: StationId,
}

impl Eq for State {}

// Reversed so `BinaryHeap` pops the cheapest entry; equal costs pop the
// lower station id first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-weight route from `from` to `to`.
///
/// Returns `None` if `to` is unreachable and an empty route if the two
/// stations are the same. When two routes into a station cost the same, the
/// one whose final edge was inserted first is kept, so results depend only
/// on the graph and its insertion order.
pub(crate) fn shortest_path<'g, W>(
    graph: &'g Graph,
    from: StationId,
    to: StationId,
    weight: &W,
) -> Option<Vec<TraveledEdge<'g>>>
where
    W: EdgeWeight + ?Sized,
{
    let n = graph.station_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<EdgeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[from.0] = 0.0;
    heap.push(State {
        cost: 0.0,
        station: from,
    });

    while let Some(State { cost, station }) = heap.pop() {
        if settled[station.0] {
            continue;
        }
        settled[station.0] = true;

        if station == to {
            break;
        }

        for &edge_id in graph.incident(station) {
            let edge = graph.edge(edge_id);
            let next = edge.opposite(station);
            if settled[next.0] {
                continue;
            }

            let w = weight.weight(&edge.transport);
            debug_assert!(w >= 0.0, "negative edge weight {w}");
            let candidate = cost + w;

            match candidate.total_cmp(&dist[next.0]) {
                Ordering::Less => {
                    dist[next.0] = candidate;
                    prev[next.0] = Some(edge_id);
                    heap.push(State {
                        cost: candidate,
                        station: next,
                    });
                }
                Ordering::Equal => {
                    if prev[next.0].is_some_and(|p| edge_id < p) {
                        prev[next.0] = Some(edge_id);
                    }
                }
                Ordering::Greater => {}
            }
        }
    }

    if !settled[to.0] {
        trace!(from = from.0, to = to.0, "destination unreachable");
        return None;
    }

    // Walk predecessors back from the destination; each step knows which
    // side it entered from, which fixes the traveled direction.
    let mut path = Vec::new();
    let mut at = to;
    while at != from {
        let id = prev[at.0]?;
        let edge = graph.edge(id);
        let back = edge.opposite(at);
        path.push(TraveledEdge {
            id,
            edge: &edge.transport,
            start: graph.station(back),
            end: graph.station(at),
        });
        at = back;
    }
    path.reverse();

    trace!(
        from = from.0,
        to = to.0,
        edges = path.len(),
        cost = dist[to.0],
        "shortest path found"
    );

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn station(name: &str) -> Station {
        Station::new(name, Coordinates::default())
    }

    fn edge(from: &str, to: &str, distance: f64, secs: i64) -> EdgeTransport {
        EdgeTransport::new(
            station(from),
            station(to),
            DurationJourney::from_secs(secs),
            distance,
            "L1",
        )
    }

    fn graph(edges: Vec<EdgeTransport>) -> Graph {
        let mut g = Graph::default();
        for e in edges {
            g.insert_edge(e);
        }
        g
    }

    fn id(g: &Graph, name: &str) -> StationId {
        g.lookup(name).unwrap()
    }

    fn names(path: &[TraveledEdge<'_>]) -> Vec<String> {
        let mut out: Vec<String> = path
            .first()
            .map(|e| vec![e.start_station().name().to_string()])
            .unwrap_or_default();
        out.extend(path.iter().map(|e| e.end_station().name().to_string()));
        out
    }

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(State {
            cost: 3.0,
            station: StationId(0),
        });
        heap.push(State {
            cost: 1.0,
            station: StationId(1),
        });
        heap.push(State {
            cost: 1.0,
            station: StationId(2),
        });

        assert_eq!(heap.pop().map(|s| s.station), Some(StationId(1)));
        assert_eq!(heap.pop().map(|s| s.station), Some(StationId(2)));
        assert_eq!(heap.pop().map(|s| s.station), Some(StationId(0)));
    }

    #[test]
    fn prefers_lower_total_weight() {
        // A-B-C costs 2, A-C direct costs 5
        let g = graph(vec![
            edge("A", "C", 5.0, 60),
            edge("A", "B", 1.0, 600),
            edge("B", "C", 1.0, 600),
        ]);

        let path = shortest_path(&g, id(&g, "A"), id(&g, "C"), &Weighting::Distance).unwrap();
        assert_eq!(names(&path), ["A", "B", "C"]);
    }

    #[test]
    fn weighting_by_duration() {
        let g = graph(vec![
            edge("A", "C", 5.0, 60),
            edge("A", "B", 1.0, 600),
            edge("B", "C", 1.0, 600),
        ]);

        let path = shortest_path(&g, id(&g, "A"), id(&g, "C"), &Weighting::Duration).unwrap();
        assert_eq!(names(&path), ["A", "C"]);
    }

    #[test]
    fn closure_weight() {
        let g = graph(vec![
            edge("A", "C", 5.0, 60),
            edge("A", "B", 1.0, 600),
            edge("B", "C", 1.0, 600),
        ]);

        // Every hop costs the same, so the direct edge wins
        let hops = |_: &EdgeTransport| 1.0;
        let path = shortest_path(&g, id(&g, "A"), id(&g, "C"), &hops).unwrap();
        assert_eq!(names(&path), ["A", "C"]);
    }

    #[test]
    fn edges_traversed_backwards_are_relabelled() {
        // Supplied as C->B and B->A, traveled A->B->C
        let g = graph(vec![edge("C", "B", 1.0, 60), edge("B", "A", 1.0, 60)]);

        let path = shortest_path(&g, id(&g, "A"), id(&g, "C"), &Weighting::Distance).unwrap();
        assert_eq!(names(&path), ["A", "B", "C"]);
        assert!(path.iter().all(TraveledEdge::is_reversed));

        // Stored edges keep their supplied direction
        assert_eq!(g.edges()[0].transport.start_station().name(), "C");
        assert_eq!(g.edges()[1].transport.start_station().name(), "B");
    }

    #[test]
    fn same_station_is_empty() {
        let g = graph(vec![edge("A", "B", 1.0, 60)]);
        let path = shortest_path(&g, id(&g, "A"), id(&g, "A"), &Weighting::Distance).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unreachable_is_none() {
        let g = graph(vec![edge("A", "B", 1.0, 60), edge("C", "D", 1.0, 60)]);
        assert!(shortest_path(&g, id(&g, "A"), id(&g, "D"), &Weighting::Distance).is_none());
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(vec![edge("A", "B", 0.0, 0), edge("B", "C", 0.0, 0)]);
        let path = shortest_path(&g, id(&g, "A"), id(&g, "C"), &Weighting::Distance).unwrap();
        assert_eq!(names(&path), ["A", "B", "C"]);
    }

    #[test]
    fn parallel_edges_pick_cheapest() {
        let g = graph(vec![edge("A", "B", 3.0, 60), edge("B", "A", 2.0, 60)]);
        let path = shortest_path(&g, id(&g, "A"), id(&g, "B"), &Weighting::Distance).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id(), EdgeId(1));
        assert!(path[0].is_reversed());
    }

    #[test]
    fn equal_parallel_edges_pick_first_inserted() {
        let g = graph(vec![edge("A", "B", 2.0, 60), edge("A", "B", 2.0, 60)]);
        let path = shortest_path(&g, id(&g, "A"), id(&g, "B"), &Weighting::Distance).unwrap();
        assert_eq!(path[0].id(), EdgeId(0));
    }
}
