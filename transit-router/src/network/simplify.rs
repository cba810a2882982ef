//! Merging consecutive same-line edges into legs.

use crate::domain::{Connection, DurationJourney, EdgeTransport, Station};

/// A run of consecutive edges on one line, being accumulated.
struct Run<'a> {
    start: &'a Station,
    line_name: &'a str,
    distance: f64,
    duration: DurationJourney,
}

impl<'a> Run<'a> {
    fn begin<C: Connection>(edge: &'a C) -> Self {
        Self {
            start: edge.start_station(),
            line_name: edge.line_name(),
            distance: edge.distance(),
            duration: edge.duration().copy(),
        }
    }

    fn extend<C: Connection>(&mut self, edge: &C) {
        self.distance += edge.distance();
        self.duration.add(edge.duration());
    }

    fn finish(self, end: &Station) -> EdgeTransport {
        EdgeTransport::new(
            self.start.clone(),
            end.clone(),
            self.duration,
            self.distance,
            self.line_name,
        )
    }
}

/// Collapse runs of consecutive edges on the same line into single legs.
///
/// Each leg starts where its run starts, ends where the next run begins (or
/// where the path ends), and carries the summed distance and duration of the
/// run. Input edges are only read; totals are built on copies.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Connection, Coordinates, DurationJourney, EdgeTransport, Station};
/// use transit_router::network::simplify_path;
///
/// let s = |name: &str| Station::new(name, Coordinates::default());
/// let e = |a: &str, b: &str, d: f64, line: &str| {
///     EdgeTransport::new(s(a), s(b), DurationJourney::from_mins(2), d, line)
/// };
///
/// let path = vec![e("A", "B", 1.0, "L1"), e("B", "C", 1.0, "L1"), e("C", "D", 2.0, "L2")];
/// let legs = simplify_path(&path);
///
/// assert_eq!(legs.len(), 2);
/// assert_eq!(legs[0].end_station().name(), "C");
/// assert_eq!(legs[0].distance(), 2.0);
/// assert_eq!(legs[1].line_name(), "L2");
/// ```
pub fn simplify_path<C: Connection>(path: &[C]) -> Vec<EdgeTransport> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut run = Run::begin(first);
    let Some((last, middle)) = rest.split_last() else {
        return vec![run.finish(first.end_station())];
    };

    let mut legs = Vec::new();
    for edge in middle {
        if edge.line_name() == run.line_name {
            run.extend(edge);
        } else {
            legs.push(run.finish(edge.start_station()));
            run = Run::begin(edge);
        }
    }

    if last.line_name() == run.line_name {
        run.extend(last);
        legs.push(run.finish(last.end_station()));
    } else {
        legs.push(run.finish(last.start_station()));
        legs.push(last.to_edge());
    }

    legs
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinates;
    use proptest::prelude::*;

    /// Generate a chained path S0 -> S1 -> ... with whole-number distances
    /// so sums are exact.
    fn chained_path() -> impl Strategy<Value = Vec<EdgeTransport>> {
        prop::collection::vec((0u32..3, 0u32..100, 0i64..600), 0..20).prop_map(|hops| {
            hops.into_iter()
                .enumerate()
                .map(|(i, (line, distance, secs))| {
                    EdgeTransport::new(
                        Station::new(format!("S{i}"), Coordinates::default()),
                        Station::new(format!("S{}", i + 1), Coordinates::default()),
                        DurationJourney::from_secs(secs),
                        f64::from(distance),
                        format!("L{line}"),
                    )
                })
                .collect()
        })
    }

    proptest! {
        /// Total distance survives simplification
        #[test]
        fn distance_conserved(path in chained_path()) {
            let legs = simplify_path(&path);
            let before: f64 = path.iter().map(|e| e.distance()).sum();
            let after: f64 = legs.iter().map(|e| e.distance()).sum();
            prop_assert_eq!(before, after);
        }

        /// Total duration survives simplification
        #[test]
        fn duration_conserved(path in chained_path()) {
            let legs = simplify_path(&path);
            let before: DurationJourney = path.iter().map(|e| e.duration()).sum();
            let after: DurationJourney = legs.iter().map(|e| e.duration()).sum();
            prop_assert_eq!(before, after);
        }

        /// Legs chain end to start and span the whole path
        #[test]
        fn legs_chain(path in chained_path()) {
            let legs = simplify_path(&path);
            prop_assert_eq!(legs.is_empty(), path.is_empty());
            for pair in legs.windows(2) {
                prop_assert_eq!(pair[0].end_station(), pair[1].start_station());
            }
            if let (Some(first), Some(last)) = (legs.first(), legs.last()) {
                prop_assert_eq!(first.start_station(), path[0].start_station());
                prop_assert_eq!(last.end_station(), path[path.len() - 1].end_station());
            }
        }

        /// Adjacent legs never share a line
        #[test]
        fn adjacent_legs_differ(path in chained_path()) {
            let legs = simplify_path(&path);
            for pair in legs.windows(2) {
                prop_assert_ne!(pair[0].line_name(), pair[1].line_name());
            }
        }
    }
}
