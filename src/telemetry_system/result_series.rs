use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    #[serde(rename = "Time")]
    pub time: usize,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
}

/// Time-ordered altitude samples of one trajectory variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSeries {
    points: Vec<SeriesPoint>,
}

impl ResultSeries {
    pub fn new() -> Self {
        ResultSeries { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ResultSeries {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, time: usize, altitude: f64) {
        debug_assert!(self.points.last().map_or(true, |last| last.time < time));
        self.points.push(SeriesPoint { time, altitude });
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter().map(|p| p.time)
    }

    pub fn altitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.altitude)
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Highest altitude in the series, or NaN when the series is empty.
    pub fn max_altitude(&self) -> f64 {
        self.altitudes().reduce(f64::max).unwrap_or(f64::NAN)
    }

    pub fn as_pairs(&self) -> Vec<(usize, f64)> {
        self.points.iter().map(|p| (p.time, p.altitude)).collect()
    }
}
