//! Loading and cleaning of the historical mission table.
//!
//! Cleaning mirrors the dashboard's load step: the launch date and the seven
//! numeric columns are coerced (unparseable cells become missing), every row
//! with a missing cell is dropped, then exact duplicate rows are dropped
//! keeping the first occurrence.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::errors::SimulationError;

pub const MISSION_TYPE: &str = "Mission Type";
pub const MISSION_SUCCESS: &str = "Mission Success";
pub const LAUNCH_DATE: &str = "Launch Date";

/// Label in the `Mission Success` column that counts as a success.
pub const SUCCESS_LABEL: &str = "Success";

/// Cell values read as missing, matching common CSV null markers.
const NA_VALUES: [&str; 11] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericColumn {
    MissionCost,
    PayloadWeight,
    FuelConsumption,
    MissionDuration,
    DistanceFromEarth,
    CrewSize,
    ScientificYield,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 7] = [
        NumericColumn::MissionCost,
        NumericColumn::PayloadWeight,
        NumericColumn::FuelConsumption,
        NumericColumn::MissionDuration,
        NumericColumn::DistanceFromEarth,
        NumericColumn::CrewSize,
        NumericColumn::ScientificYield,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            NumericColumn::MissionCost => "Mission Cost",
            NumericColumn::PayloadWeight => "Payload Weight",
            NumericColumn::FuelConsumption => "Fuel Consumption",
            NumericColumn::MissionDuration => "Mission Duration",
            NumericColumn::DistanceFromEarth => "Distance from Earth",
            NumericColumn::CrewSize => "Crew Size",
            NumericColumn::ScientificYield => "Scientific Yield",
        }
    }

    pub fn value(&self, record: &MissionRecord) -> f64 {
        record.numeric[*self as usize]
    }
}

/// One cleaned mission row. Every field is present and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRecord {
    pub mission_type: String,
    pub mission_success: String,
    pub launch_date: NaiveDate,
    numeric: [f64; 7],
    /// Values of the non-required columns, aligned with `MissionDataset::extra_columns`.
    pub extra: Vec<String>,
}

impl MissionRecord {
    pub fn new(
        mission_type: impl Into<String>,
        mission_success: impl Into<String>,
        launch_date: NaiveDate,
        numeric: [f64; 7],
    ) -> Self {
        MissionRecord {
            mission_type: mission_type.into(),
            mission_success: mission_success.into(),
            launch_date,
            numeric,
            extra: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.mission_success == SUCCESS_LABEL
    }

    pub fn mission_cost(&self) -> f64 {
        NumericColumn::MissionCost.value(self)
    }

    pub fn payload_weight(&self) -> f64 {
        NumericColumn::PayloadWeight.value(self)
    }

    pub fn fuel_consumption(&self) -> f64 {
        NumericColumn::FuelConsumption.value(self)
    }

    pub fn crew_size(&self) -> f64 {
        NumericColumn::CrewSize.value(self)
    }

    fn dedup_key(&self) -> Vec<String> {
        let mut key = Vec::with_capacity(3 + self.numeric.len() + self.extra.len());
        key.push(self.mission_type.clone());
        key.push(self.mission_success.clone());
        key.push(self.launch_date.to_string());
        // -0.0 and 0.0 compare equal as values, so normalise before hashing bits.
        key.extend(
            self.numeric
                .iter()
                .map(|v| format!("{:x}", (v + 0.0).to_bits())),
        );
        key.extend(self.extra.iter().cloned());
        key
    }
}

/// Row counts observed while cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleaningReport {
    pub rows_read: usize,
    pub dropped_incomplete: usize,
    pub dropped_duplicates: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MissionDataset {
    records: Vec<MissionRecord>,
    extra_columns: Vec<String>,
    report: CleaningReport,
}

struct ColumnLayout {
    mission_type: usize,
    mission_success: usize,
    launch_date: usize,
    numeric: [usize; 7],
    extra: Vec<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, SimulationError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SimulationError::MissingColumn(name.to_string()))
        };

        let mission_type = find(MISSION_TYPE)?;
        let mission_success = find(MISSION_SUCCESS)?;
        let launch_date = find(LAUNCH_DATE)?;
        let mut numeric = [0; 7];
        for column in NumericColumn::ALL {
            numeric[column as usize] = find(column.header())?;
        }

        let mut required = vec![mission_type, mission_success, launch_date];
        required.extend_from_slice(&numeric);
        let extra = (0..headers.len())
            .filter(|idx| !required.contains(idx))
            .collect();

        Ok(ColumnLayout {
            mission_type,
            mission_success,
            launch_date,
            numeric,
            extra,
        })
    }

    /// `None` when any cell of the row is missing or fails to coerce.
    fn parse(&self, row: &csv::StringRecord) -> Option<MissionRecord> {
        let text = |idx: usize| row.get(idx).filter(|cell| !is_missing(cell));

        let mission_type = text(self.mission_type)?.to_string();
        let mission_success = text(self.mission_success)?.to_string();
        let launch_date = text(self.launch_date).and_then(parse_launch_date)?;

        let mut numeric = [0.0; 7];
        for (slot, idx) in numeric.iter_mut().zip(self.numeric) {
            *slot = text(idx).and_then(parse_numeric)?;
        }

        let extra = self
            .extra
            .iter()
            .map(|&idx| text(idx).map(str::to_string))
            .collect::<Option<Vec<_>>>()?;

        Some(MissionRecord {
            mission_type,
            mission_success,
            launch_date,
            numeric,
            extra,
        })
    }
}

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell.trim())
}

pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

pub fn parse_launch_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
                .map(|dt| dt.date())
        })
}

impl MissionDataset {
    pub fn from_records(records: Vec<MissionRecord>) -> Self {
        MissionDataset {
            report: CleaningReport {
                rows_read: records.len(),
                ..CleaningReport::default()
            },
            records,
            extra_columns: Vec::new(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        info!("Loading mission dataset from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SimulationError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let layout = ColumnLayout::resolve(&headers)?;

        let mut report = CleaningReport::default();
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for row in rdr.records() {
            let row = row?;
            report.rows_read += 1;

            let Some(record) = layout.parse(&row) else {
                report.dropped_incomplete += 1;
                continue;
            };

            if seen.insert(record.dedup_key()) {
                records.push(record);
            } else {
                report.dropped_duplicates += 1;
            }
        }

        info!(
            "Cleaned mission dataset: {} rows read, {} incomplete, {} duplicates, {} kept",
            report.rows_read,
            report.dropped_incomplete,
            report.dropped_duplicates,
            records.len()
        );

        Ok(MissionDataset {
            records,
            extra_columns: layout.extra.iter().map(|&idx| headers[idx].to_string()).collect(),
            report,
        })
    }

    pub fn records(&self) -> &[MissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn report(&self) -> CleaningReport {
        self.report
    }

    /// Distinct mission types in order of first appearance.
    pub fn mission_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.mission_type.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn filter_by_type(&self, mission_type: &str) -> Vec<&MissionRecord> {
        self.records
            .iter()
            .filter(|r| r.mission_type == mission_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Mission Name,Launch Date,Mission Type,Mission Success,Mission Cost,\
Payload Weight,Fuel Consumption,Mission Duration,Distance from Earth,Crew Size,Scientific Yield";

    fn load(rows: &[&str]) -> MissionDataset {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        MissionDataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_clean_rows_are_typed() {
        let dataset = load(&["Ares,2024-03-01,Exploration,Success,120.5,2500,9000,30,0.4,3,77.1"]);

        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.mission_type, "Exploration");
        assert!(record.is_success());
        assert_eq!(record.launch_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(record.mission_cost(), 120.5);
        assert_eq!(record.crew_size(), 3.0);
        assert_eq!(dataset.extra_columns(), ["Mission Name".to_string()]);
        assert_eq!(record.extra, vec!["Ares".to_string()]);
    }

    #[test]
    fn test_unparseable_cells_drop_the_row() {
        let dataset = load(&[
            "A,2024-03-01,Exploration,Success,abc,2500,9000,30,0.4,3,77.1",
            "B,not a date,Exploration,Success,1,2500,9000,30,0.4,3,77.1",
            "C,2024-03-01,Exploration,Success,1,2500,,30,0.4,3,77.1",
            "D,2024-03-01,,Failure,1,2500,9000,30,0.4,3,77.1",
            "E,2024-03-01,Research,Failure,1,2500,9000,30,0.4,3,77.1",
        ]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].extra[0], "E");
        assert_eq!(dataset.report().dropped_incomplete, 4);
    }

    #[test]
    fn test_short_rows_count_as_incomplete() {
        let dataset = load(&["A,2024-03-01,Exploration,Success,1,2"]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.report().rows_read, 1);
    }

    #[test]
    fn test_duplicates_dropped_after_coercion() {
        let dataset = load(&[
            "A,2024-03-01,Exploration,Success,1,2500,9000,30,0.4,3,77.1",
            "A,2024-03-01,Exploration,Success,1.0,2500,9000,30,0.40,3,77.10",
            "A,2024-03-01 00:00:00,Exploration,Success,1,2500,9000,30,0.4,3,77.1",
            "B,2024-03-01,Exploration,Success,1,2500,9000,30,0.4,3,77.1",
        ]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.report().dropped_duplicates, 2);
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let csv = "Mission Type,Mission Success\nExploration,Success";
        let err = MissionDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SimulationError::MissingColumn(ref c) if c == "Launch Date"));
    }

    #[test]
    fn test_mission_types_in_first_seen_order() {
        let dataset = load(&[
            "A,2024-03-01,Research,Success,1,2500,9000,30,0.4,3,77.1",
            "B,2024-03-02,Exploration,Success,1,2500,9000,30,0.4,3,77.1",
            "C,2024-03-03,Research,Failure,1,2500,9000,30,0.4,3,77.1",
        ]);

        assert_eq!(dataset.mission_types(), vec!["Research", "Exploration"]);
        assert_eq!(dataset.filter_by_type("Research").len(), 2);
        assert!(dataset.filter_by_type("Colonization").is_empty());
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2031, 7, 9);
        assert_eq!(parse_launch_date("2031-07-09"), expected);
        assert_eq!(parse_launch_date("07/09/2031"), expected);
        assert_eq!(parse_launch_date("2031-07-09T14:30:00"), expected);
        assert_eq!(parse_launch_date("2031-13-09"), None);
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("12kg"), None);
    }
}
