//! Nearest-neighbor tour over Euclidean cities.
//!
//! Cities are addressed by their position in the input list, not by
//! their `id` field.

use serde::{Deserialize, Serialize};
use stepwise_ir::types::City;
use stepwise_ir::validate::{validate_cities, validate_city_ceiling, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspStep {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub description: String,
    /// Tour so far, ending at `to`.
    pub path: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspResult {
    /// Closed tour: starts and ends at city 0.
    pub tour: Vec<usize>,
    pub total_distance: f64,
    pub steps: Vec<TspStep>,
}

/// Closest city to `from` that `visited` does not contain. Ties go to
/// the lowest index.
fn nearest_unvisited(cities: &[City], from: usize, visited: &[bool]) -> Option<(usize, f64)> {
    let origin = &cities[from];
    let mut best: Option<(usize, f64)> = None;
    for (i, city) in cities.iter().enumerate() {
        if visited[i] {
            continue;
        }
        let d = origin.distance_to(city);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

/// Greedy tour from city 0, one step per move including the closing
/// return to the start.
pub fn tsp_solve(cities: &[City]) -> Result<TspResult, ValidationError> {
    validate_cities(cities)?;
    let mut trace = Trace::new();
    let mut visited = vec![false; cities.len()];
    let mut tour = vec![0];
    let mut total_distance = 0.0;
    visited[0] = true;

    let mut current = 0;
    while let Some((next, distance)) = nearest_unvisited(cities, current, &visited) {
        visited[next] = true;
        tour.push(next);
        total_distance += distance;
        trace.record(TspStep {
            from: current,
            to: next,
            distance,
            description: format!("Nearest unvisited city to {current} is {next} ({distance:.1})."),
            path: tour.clone(),
        });
        current = next;
    }

    let closing = cities[current].distance_to(&cities[0]);
    tour.push(0);
    total_distance += closing;
    trace.record(TspStep {
        from: current,
        to: 0,
        distance: closing,
        description: format!("All cities visited. Returning to city 0 ({closing:.1})."),
        path: tour.clone(),
    });

    debug!(cities = cities.len(), total_distance, "tsp tour built");
    Ok(TspResult {
        tour,
        total_distance,
        steps: trace.into_steps(),
    })
}

/// Next city for a player building a tour by hand.
///
/// Once every city is in `current_path` the answer is the start, closing
/// the loop. `None` for an empty path, no cities, or a path holding an
/// index past the city list. A city list over the size limit is rejected.
pub fn tsp_next_move(
    cities: &[City],
    current_path: &[usize],
) -> Result<Option<usize>, ValidationError> {
    validate_city_ceiling(cities)?;
    let (Some(&first), Some(&last)) = (current_path.first(), current_path.last()) else {
        return Ok(None);
    };
    if cities.is_empty() || current_path.iter().any(|&i| i >= cities.len()) {
        return Ok(None);
    }

    let mut visited = vec![false; cities.len()];
    for &i in current_path {
        visited[i] = true;
    }
    if visited.iter().all(|v| *v) {
        return Ok(Some(first));
    }
    Ok(nearest_unvisited(cities, last, &visited).map(|(i, _)| i))
}
