//! End-to-end: journey rows arrive as JSON, become typed records, and feed the algorithms.

use roundel::{
    analysis,
    network::{JourneyRecord, Network},
    shortest::dijkstra,
    spanning::{kruskal, redundant_edges},
};
use serde::Deserialize;

/// The raw row shape produced by the (out-of-crate) ingestion layer.
#[derive(Deserialize)]
struct Row {
    line: String,
    station_a: String,
    station_b: String,
    duration: f64,
}

const ROWS: &str = r#"[
    { "line": "Victoria", "station_a": "Green Park", "station_b": "Victoria", "duration": 2 },
    { "line": "Victoria", "station_a": "Victoria", "station_b": "Pimlico", "duration": 2 },
    { "line": "Jubilee", "station_a": "Green Park", "station_b": "Westminster", "duration": 2 },
    { "line": "Jubilee", "station_a": "Westminster", "station_b": "Waterloo", "duration": 1 },
    { "line": "District", "station_a": "Westminster", "station_b": "Green Park", "duration": 3 },
    { "line": "Circle", "station_a": "Victoria", "station_b": "Westminster", "duration": 4 }
]"#;

fn load_network() -> Network {
    let rows: Vec<Row> = serde_json::from_str(ROWS).unwrap();

    let records: Vec<JourneyRecord> = rows
        .into_iter()
        .map(|row| JourneyRecord {
            line: row.line,
            station_a: row.station_a,
            station_b: row.station_b,
            duration: row.duration,
        })
        .collect();

    Network::from_records(&records).unwrap()
}

#[test]
fn builds_the_expected_graph() {
    let network = load_network();

    assert_eq!(network.station_count(), 5);

    // The District row repeats the Jubilee section and is skipped; the Circle row is new.
    assert_eq!(network.graph().edge_count(), 5);

    let green_park = network.station_index("Green Park").unwrap();
    let westminster = network.station_index("Westminster").unwrap();
    assert_eq!(network.graph().edge_weight(green_park, westminster), Some(2.0));
}

#[test]
fn quickest_journey_across_the_network() {
    let network = load_network();

    let pimlico = network.station_index("Pimlico").unwrap();
    let waterloo = network.station_index("Waterloo").unwrap();

    let paths = dijkstra(network.graph(), pimlico).unwrap();

    // Two routes tie at 7 minutes (via Green Park or via the Circle section); either is a
    // valid answer, so only the duration and the path's soundness are asserted.
    assert_eq!(paths.distance(waterloo).unwrap(), 7.0);

    let path = paths.path_to(waterloo).unwrap().unwrap();
    assert_eq!(*path.first().unwrap(), pimlico);
    assert_eq!(*path.last().unwrap(), waterloo);

    let total: f64 = path
        .windows(2)
        .map(|pair| network.graph().edge_weight(pair[0], pair[1]).unwrap())
        .sum();
    assert_eq!(total, 7.0);
}

#[test]
fn closable_sections() {
    let network = load_network();

    let tree = kruskal(network.graph());
    assert_eq!(tree.edge_count(), network.station_count() - 1);

    // Only the Victoria - Westminster section is redundant.
    let redundant = redundant_edges(network.graph());
    assert_eq!(redundant.len(), 1);

    let (u, v) = redundant[0].endpoints();
    let mut names = [
        network.station_name(u).unwrap(),
        network.station_name(v).unwrap(),
    ];
    names.sort();
    assert_eq!(names, ["Victoria", "Westminster"]);
}

#[test]
fn longest_journey_across_the_network() {
    let network = load_network();

    let journey = analysis::longest_journey(network.graph(), 2)
        .unwrap()
        .unwrap();

    // The farthest pair is Pimlico - Waterloo at 7 minutes.
    let mut endpoints = [
        network.station_name(journey.source).unwrap(),
        network.station_name(journey.target).unwrap(),
    ];
    endpoints.sort();
    assert_eq!(endpoints, ["Pimlico", "Waterloo"]);
    assert_eq!(journey.duration, 7.0);

    let total: f64 = journey
        .path
        .windows(2)
        .map(|pair| network.graph().edge_weight(pair[0], pair[1]).unwrap())
        .sum();
    assert_eq!(total, 7.0);
}