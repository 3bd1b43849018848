//! A module mapping station-level journey records onto a dense-index graph.
//!
//! Ingestion proper (spreadsheets, column juggling) lives outside this crate; what arrives here
//! is the typed row form, [`JourneyRecord`]. Building a [`Network`] trims the station names,
//! drops rows that are unusable, assigns each distinct name a dense index in sorted-name order
//! and inserts each unordered station pair once.

use std::collections::BTreeMap;

use crate::{error::GraphError, graph::Graph};

/// One validated row of journey data: a line name, the two stations it connects and the
/// journey duration between them.
#[derive(Clone, Debug, PartialEq)]
pub struct JourneyRecord {
    pub line: String,
    pub station_a: String,
    pub station_b: String,
    pub duration: f64,
}

/// A transit network: a [`Graph`] over dense station indices together with the two-way mapping
/// between indices and station names.
///
/// Indices are assigned in sorted-unique-name order, so the same set of records always
/// produces the same indexing.
#[derive(Clone, Debug)]
pub struct Network {
    graph: Graph,
    stations: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl Network {
    /// Builds a network from journey records.
    ///
    /// Station names are trimmed before use. Rows with an empty station name, a self-loop pair
    /// or a negative or non-finite duration are dropped. When several rows connect the same
    /// station pair (the same section served by multiple lines), the first row wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::network::{JourneyRecord, Network};
    ///
    /// let row = |a: &str, b: &str, duration| JourneyRecord {
    ///     line: "Northern".into(),
    ///     station_a: a.into(),
    ///     station_b: b.into(),
    ///     duration,
    /// };
    ///
    /// let network = Network::from_records(&[
    ///     row("Bank", "Moorgate", 2.0),
    ///     row("Moorgate", "Old Street", 1.0),
    /// ]).unwrap();
    ///
    /// assert_eq!(network.station_count(), 3);
    /// assert_eq!(network.station_index("Bank"), Some(0));
    /// ```
    pub fn from_records(records: &[JourneyRecord]) -> Result<Self, GraphError> {
        let mut usable: Vec<(&str, &str, f64)> = Vec::with_capacity(records.len());

        for record in records {
            let a = record.station_a.trim();
            let b = record.station_b.trim();

            if a.is_empty() || b.is_empty() || a == b {
                continue;
            }
            if !(record.duration.is_finite() && record.duration >= 0.0) {
                continue;
            }

            usable.push((a, b, record.duration));
        }

        // Assign indices in sorted-unique-name order; BTreeMap keeps the keys sorted.
        let mut index: BTreeMap<String, usize> = BTreeMap::new();
        for &(a, b, _) in &usable {
            let next = index.len();
            index.entry(a.to_owned()).or_insert(next);
            let next = index.len();
            index.entry(b.to_owned()).or_insert(next);
        }

        let mut stations = vec![String::new(); index.len()];
        for (position, (name, slot)) in index.iter_mut().enumerate() {
            *slot = position;
            stations[position] = name.clone();
        }

        let mut graph = Graph::new(stations.len());
        for (a, b, duration) in usable {
            let u = index[a];
            let v = index[b];

            // First row wins for repeated sections.
            if !graph.has_edge(u, v) {
                graph.insert_edge(u, v, duration)?;
            }
        }

        Ok(Self {
            graph,
            stations,
            index,
        })
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the dense index of a station name, trimming it first.
    pub fn station_index(&self, name: &str) -> Option<usize> {
        self.index.get(name.trim()).copied()
    }

    /// Returns the station name at a dense index.
    pub fn station_name(&self, index: usize) -> Option<&str> {
        self.stations.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str, a: &str, b: &str, duration: f64) -> JourneyRecord {
        JourneyRecord {
            line: line.to_owned(),
            station_a: a.to_owned(),
            station_b: b.to_owned(),
            duration,
        }
    }

    #[test]
    fn indices_follow_sorted_name_order() {
        let network = Network::from_records(&[
            record("District", "Temple", "Embankment", 2.0),
            record("District", "Embankment", "Westminster", 1.0),
        ])
        .unwrap();

        assert_eq!(network.station_index("Embankment"), Some(0));
        assert_eq!(network.station_index("Temple"), Some(1));
        assert_eq!(network.station_index("Westminster"), Some(2));

        assert_eq!(network.station_name(0), Some("Embankment"));
        assert_eq!(network.station_name(3), None);
    }

    #[test]
    fn names_are_trimmed() {
        let network = Network::from_records(&[record("Circle", " Tower Hill ", "Monument", 2.0)])
            .unwrap();

        assert_eq!(network.station_count(), 2);
        assert_eq!(network.station_index("Tower Hill"), Some(1));
        assert_eq!(network.station_index("  Monument "), Some(0));
    }

    #[test]
    fn invalid_rows_are_dropped() {
        let network = Network::from_records(&[
            record("Circle", "", "Monument", 2.0),
            record("Circle", "Monument", "Monument", 2.0),
            record("Circle", "Monument", "Tower Hill", -1.0),
            record("Circle", "Monument", "Tower Hill", f64::NAN),
            record("Circle", "Monument", "Tower Hill", 2.0),
        ])
        .unwrap();

        assert_eq!(network.station_count(), 2);
        assert_eq!(network.graph().edge_count(), 1);
    }

    #[test]
    fn first_row_wins_for_repeated_sections() {
        let network = Network::from_records(&[
            record("Circle", "Monument", "Tower Hill", 2.0),
            record("District", "Tower Hill", "Monument", 9.0),
        ])
        .unwrap();

        let u = network.station_index("Monument").unwrap();
        let v = network.station_index("Tower Hill").unwrap();
        assert_eq!(network.graph().edge_weight(u, v), Some(2.0));
    }

    #[test]
    fn empty_records_build_an_empty_network() {
        let network = Network::from_records(&[]).unwrap();

        assert_eq!(network.station_count(), 0);
        assert_eq!(network.graph().edge_count(), 0);
    }
}
