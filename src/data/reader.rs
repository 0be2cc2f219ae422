//! CSV ingestion for weather observations.
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::info;

use super::{dataset::Dataset, sample::WeatherItem};
use crate::error::{Result, TreeError};

const COLUMNS: usize = 5;

/// Reads `rain,lightning,cloudy,temperature,good_weather` rows after a header line.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Fails on malformed CSV, non-numeric fields or rows with fewer than five columns.
pub fn read_weather_csv<R: Read>(reader: R) -> Result<Dataset<WeatherItem>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (record_index, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let mut values = [0.0; COLUMNS];
        for (column, value) in values.iter_mut().enumerate() {
            let field = record.get(column).ok_or(TreeError::MissingColumn {
                column,
                record: record_index + 1,
            })?;
            *value = field.parse::<f64>()?;
        }
        let [rain, lightning, cloudy, temperature, good] = values;
        items.push(WeatherItem::labeled(rain, lightning, cloudy, temperature, good));
    }

    info!(samples = items.len(), "loaded weather samples");
    Ok(Dataset::new(items))
}

pub fn read_weather_file<P: AsRef<Path>>(path: P) -> Result<Dataset<WeatherItem>> {
    read_weather_csv(File::open(path)?)
}
