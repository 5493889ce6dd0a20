//! Aggregates over cleaned mission records. Empty inputs give NaN, never errors.

use std::collections::BTreeMap;

use super::dataset::{MissionRecord, NumericColumn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionOverview {
    pub missions: usize,
    pub success_rate: f64, // %
    pub avg_cost: f64,
    pub avg_payload: f64,
}

impl MissionOverview {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MissionRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        MissionOverview {
            missions: records.clone().count(),
            success_rate: success_rate(records.clone()),
            avg_cost: column_mean(records.clone(), NumericColumn::MissionCost),
            avg_payload: column_mean(records, NumericColumn::PayloadWeight),
        }
    }
}

/// Percentage of records labelled as a success.
pub fn success_rate<'a>(records: impl IntoIterator<Item = &'a MissionRecord>) -> f64 {
    let (successes, total) = records
        .into_iter()
        .fold((0usize, 0usize), |(s, n), r| (s + r.is_success() as usize, n + 1));
    if total == 0 {
        f64::NAN
    } else {
        successes as f64 / total as f64 * 100.0
    }
}

pub fn column_mean<'a>(
    records: impl IntoIterator<Item = &'a MissionRecord>,
    column: NumericColumn,
) -> f64 {
    mean(records.into_iter().map(|r| column.value(r)))
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Mean mission cost per `Mission Success` label, sorted by label.
pub fn cost_by_success<'a>(
    records: impl IntoIterator<Item = &'a MissionRecord>,
) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.mission_success.as_str()).or_default();
        entry.0 += record.mission_cost();
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(label, (sum, n))| (label.to_string(), sum / n as f64))
        .collect()
}

/// Pearson correlation coefficient. NaN for fewer than two pairs or zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = mean(xs[..n].iter().copied());
    let mean_y = mean(ys[..n].iter().copied());

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let divisor = (sxx * syy).sqrt();
    if divisor == 0.0 {
        f64::NAN
    } else {
        sxy / divisor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<NumericColumn>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Pairwise correlations over every numeric column.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MissionRecord>) -> Self {
        let records: Vec<&MissionRecord> = records.into_iter().collect();
        let columns = NumericColumn::ALL.to_vec();
        let data: Vec<Vec<f64>> = columns
            .iter()
            .map(|c| records.iter().map(|r| c.value(r)).collect())
            .collect();

        let values = data
            .iter()
            .map(|xs| data.iter().map(|ys| pearson(xs, ys)).collect())
            .collect();

        CorrelationMatrix { columns, values }
    }

    pub fn get(&self, a: NumericColumn, b: NumericColumn) -> Option<f64> {
        let i = self.columns.iter().position(|&c| c == a)?;
        let j = self.columns.iter().position(|&c| c == b)?;
        Some(self.values[i][j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn record(kind: &str, outcome: &str, cost: f64, payload: f64, fuel: f64) -> MissionRecord {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        MissionRecord::new(kind, outcome, date, [cost, payload, fuel, 10.0, 1.0, 2.0, 50.0])
    }

    fn sample_records() -> Vec<MissionRecord> {
        vec![
            record("Research", "Success", 100.0, 1_000.0, 2_000.0),
            record("Research", "Failure", 300.0, 2_000.0, 4_000.0),
            record("Exploration", "Success", 200.0, 3_000.0, 6_000.0),
            record("Exploration", "Success", 400.0, 4_000.0, 8_100.0),
        ]
    }

    #[test]
    fn test_overview() {
        let records = sample_records();
        let overview = MissionOverview::from_records(&records);

        assert_eq!(overview.missions, 4);
        assert_relative_eq!(overview.success_rate, 75.0);
        assert_relative_eq!(overview.avg_cost, 250.0);
        assert_relative_eq!(overview.avg_payload, 2_500.0);
    }

    #[test]
    fn test_empty_overview_is_nan() {
        let overview = MissionOverview::from_records(&Vec::<MissionRecord>::new());
        assert_eq!(overview.missions, 0);
        assert!(overview.success_rate.is_nan());
        assert!(overview.avg_cost.is_nan());
    }

    #[test]
    fn test_cost_by_success_sorted_by_label() {
        let records = sample_records();
        let groups = cost_by_success(&records);

        assert_eq!(
            groups,
            vec![
                ("Failure".to_string(), 300.0),
                ("Success".to_string(), 700.0 / 3.0)
            ]
        );
    }

    #[test]
    fn test_pearson_perfect_and_degenerate() {
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0, epsilon = 1e-12);
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_correlation_matrix() {
        let records = sample_records();
        let matrix = CorrelationMatrix::from_records(&records);

        assert_eq!(matrix.columns.len(), 7);
        let payload_fuel = matrix
            .get(NumericColumn::PayloadWeight, NumericColumn::FuelConsumption)
            .unwrap();
        assert!(payload_fuel > 0.99);
        assert_relative_eq!(
            matrix
                .get(NumericColumn::MissionCost, NumericColumn::MissionCost)
                .unwrap(),
            1.0,
            epsilon = 1e-12
        );
        // Constant columns have no defined correlation.
        assert!(matrix
            .get(NumericColumn::CrewSize, NumericColumn::MissionCost)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_filtered_records_feed_aggregates() {
        let records = sample_records();
        let research: Vec<&MissionRecord> = records
            .iter()
            .filter(|r| r.mission_type == "Research")
            .collect();

        assert_relative_eq!(success_rate(research.iter().copied()), 50.0);
        assert_relative_eq!(
            column_mean(research.iter().copied(), NumericColumn::MissionCost),
            200.0
        );
    }
}
