//! A module for the multi-threaded aggregation of journeys across the whole network.
//!
//! Every analysis here runs one shortest-path computation per source vertex. The sources are
//! distributed over a small pool of worker threads which claim the next unprocessed source from
//! a shared counter; each worker keeps its own accumulator, and the results are merged by the
//! caller once the workers finish. The graph itself is only ever read.

use std::{sync::Mutex, thread};

use crate::{error::GraphError, graph::Graph, shortest::dijkstra};

const MIN_NUM_THREADS: usize = 1;
const MAX_NUM_THREADS: usize = 128;

/// A journey between two stations: the shortest duration and one path realising it.
#[derive(Clone, Debug, PartialEq)]
pub struct Journey {
    pub source: usize,
    pub target: usize,
    pub duration: f64,
    pub path: Vec<usize>,
}

/// Per-source aggregate produced by a worker.
struct SourceSummary {
    source: usize,
    /// Finite durations to every reachable target with a higher index.
    durations: Vec<f64>,
    /// The farthest such target and its duration.
    farthest: Option<(usize, f64)>,
}

/// Returns the shortest duration of every connected unordered station pair.
///
/// Pairs are enumerated once (`source < target`); unreachable pairs are skipped. The result is
/// ordered by source, then target, regardless of the number of threads used.
pub fn journey_durations(graph: &Graph, num_threads: usize) -> Result<Vec<f64>, GraphError> {
    let summaries = compute_summaries(graph, num_threads)?;

    Ok(summaries
        .into_iter()
        .flat_map(|summary| summary.durations)
        .collect())
}

/// Returns the longest of all shortest journeys in the network, with its path.
///
/// Returns `Ok(None)` when no two vertices are connected. Ties on duration are broken towards
/// the smallest `(source, target)` pair so repeated runs agree.
pub fn longest_journey(graph: &Graph, num_threads: usize) -> Result<Option<Journey>, GraphError> {
    let summaries = compute_summaries(graph, num_threads)?;

    let mut best: Option<(usize, usize, f64)> = None;
    for summary in &summaries {
        if let Some((target, duration)) = summary.farthest {
            let better = match best {
                Some((_, _, best_duration)) => duration > best_duration,
                None => true,
            };
            if better {
                best = Some((summary.source, target, duration));
            }
        }
    }

    let Some((source, target, duration)) = best else {
        return Ok(None);
    };

    // One extra run from the winning source recovers the path.
    let paths = dijkstra(graph, source)?;
    let path = paths
        .path_to(target)?
        .ok_or(GraphError::InconsistentPredecessors { vertex: target })?;

    Ok(Some(Journey {
        source,
        target,
        duration,
        path,
    }))
}

/// Runs one shortest-path computation per source across the worker pool and returns the
/// per-source summaries ordered by source.
fn compute_summaries(
    graph: &Graph,
    mut num_threads: usize,
) -> Result<Vec<SourceSummary>, GraphError> {
    num_threads = num_threads.clamp(MIN_NUM_THREADS, MAX_NUM_THREADS);

    let counter = Mutex::new(0usize);

    let results: Vec<Result<Vec<SourceSummary>, GraphError>> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            handles.push(scope.spawn(|| summaries_task(graph, &counter)));
        }

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut summaries = Vec::with_capacity(graph.vertex_count());
    for result in results {
        summaries.extend(result?);
    }

    // Workers claim sources in a nondeterministic order; restore it.
    summaries.sort_by_key(|summary| summary.source);

    Ok(summaries)
}

/// The worker task: grabs the next unprocessed source until none remain, keeping its own list
/// of summaries to be merged by the caller.
fn summaries_task(
    graph: &Graph,
    counter: &Mutex<usize>,
) -> Result<Vec<SourceSummary>, GraphError> {
    let num_nodes = graph.vertex_count();
    let mut summaries = Vec::new();

    loop {
        let mut counter = counter.lock().unwrap();
        let source = *counter;
        *counter += 1;
        drop(counter);

        if source >= num_nodes {
            break;
        }

        summaries.push(summarize_source(graph, source)?);
    }

    Ok(summaries)
}

fn summarize_source(graph: &Graph, source: usize) -> Result<SourceSummary, GraphError> {
    let paths = dijkstra(graph, source)?;

    let mut durations = Vec::new();
    let mut farthest: Option<(usize, f64)> = None;

    // Only pairs with a higher target index, so each unordered pair is counted once.
    for target in source + 1..graph.vertex_count() {
        let duration = paths.distance(target)?;
        if !duration.is_finite() {
            continue;
        }

        durations.push(duration);
        if farthest.map_or(true, |(_, best)| duration > best) {
            farthest = Some((target, duration));
        }
    }

    Ok(SourceSummary {
        source,
        durations,
        farthest,
    })
}
