// Synthetic chart data for the demo CPU panel. Never used on the real data path.

use rand::Rng;

use crate::models::{ChartSeries, Point};

/// Labels "1" ..= "count - 1" (an hour-of-day style axis); empty for count <= 1.
pub fn generate_labels(count: usize) -> Vec<String> {
    (1..count).map(|i| i.to_string()).collect()
}

/// `count` values drawn uniformly from `[min, max]` inclusive. Reversed bounds are swapped.
pub fn generate_random_data<R: Rng>(rng: &mut R, min: i64, max: i64, count: usize) -> Vec<i64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    (0..count).map(|_| rng.gen_range(lo..=hi)).collect()
}

/// Demo CPU chart: 24 hourly points between 66 and 100 percent.
pub fn cpu_series<R: Rng>(rng: &mut R) -> ChartSeries<String> {
    let labels = generate_labels(25);
    let data = generate_random_data(rng, 66, 100, labels.len());
    let points: Vec<Point<String>> = labels
        .into_iter()
        .zip(data)
        .map(|(x, y)| Point { x, y: y as f64 })
        .collect();
    let y_max = points.iter().map(|p| p.y).fold(0.0, f64::max);
    ChartSeries {
        points,
        y_min: 0.0,
        y_max,
    }
}
