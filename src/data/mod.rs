//! Input record interface.
//!
//! Hosts load close-price records from wherever they live (a file, an API,
//! a mock dataset) and hand them over as `{date, close}` pairs; this module
//! turns them into chart samples. No dataset is bundled and nothing is
//! fetched here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::StockPoint;
use crate::error::{ChartError, ChartResult};

/// One raw input record: an ISO-ish date string and a close price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub date: String,
    pub close: f64,
}

/// Converts raw records into chart samples, preserving input order.
///
/// Dates parse as RFC 3339 timestamps or plain `YYYY-MM-DD` days (midnight
/// UTC). Unparseable dates and non-finite closes are explicit errors, not
/// skipped records.
pub fn records_to_points(records: &[StockRecord]) -> ChartResult<Vec<StockPoint>> {
    let mut points = Vec::with_capacity(records.len());
    for record in records {
        if !record.close.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "close for {} must be finite",
                record.date
            )));
        }
        let time = parse_record_date(&record.date)?;
        points.push(StockPoint::from_datetime_close(time, record.close));
    }
    Ok(points)
}

fn parse_record_date(raw: &str) -> ChartResult<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(ChartError::InvalidData(format!(
        "cannot parse record date {raw:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_and_plain_dates_both_parse() {
        let records = vec![
            StockRecord {
                date: "2007-04-24T07:00:00.000Z".to_owned(),
                close: 93.24,
            },
            StockRecord {
                date: "2007-04-25".to_owned(),
                close: 95.35,
            },
        ];

        let points = records_to_points(&records).expect("records convert");
        assert_eq!(points.len(), 2);
        assert!(points[0].x < points[1].x);
        assert_eq!(points[0].close, 93.24);
    }

    #[test]
    fn garbage_date_is_an_explicit_error() {
        let records = vec![StockRecord {
            date: "not-a-date".to_owned(),
            close: 1.0,
        }];

        assert!(records_to_points(&records).is_err());
    }

    #[test]
    fn records_deserialize_from_json() {
        let raw = r#"[{"date":"2008-03-18","close":132.82}]"#;
        let records: Vec<StockRecord> = serde_json::from_str(raw).expect("json records");
        let points = records_to_points(&records).expect("records convert");
        assert_eq!(points[0].close, 132.82);
    }
}
