//! In-memory customer records and the rating filter.

use serde::{Deserialize, Serialize};

pub const COL_CUSTOMER_ID: &str = "Customer ID";
pub const COL_NAME: &str = "Name";
pub const COL_AGE: &str = "Age";
pub const COL_MOBILE: &str = "Mobile No.";
pub const COL_RATING: &str = "Rating";

/// Column names in file and display order.
pub const COLUMNS: [&str; 5] = [COL_CUSTOMER_ID, COL_NAME, COL_AGE, COL_MOBILE, COL_RATING];

/// Inclusive lower bound used by "Filter by Rating".
pub const DEFAULT_RATING_THRESHOLD: f64 = 3.5;

/// One customer's attribute tuple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: u32,
    pub name: String,
    pub age: u8,
    pub mobile_number: u64,
    pub rating: f64,
}

impl CustomerRecord {
    /// Rating as shown in the table and written to disk.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Rounds a rating to one fractional digit.
pub fn round_rating(raw: f64) -> f64 {
    (raw * 10.0).round() / 10.0
}

/// Keeps the records whose rating is at least `threshold`, in input order.
pub fn filter_by_minimum_rating(records: &[CustomerRecord], threshold: f64) -> Vec<CustomerRecord> {
    records
        .iter()
        .filter(|record| record.rating >= threshold)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    #![expect(clippy::indexing_slicing)]
    use super::*;

    fn record(customer_id: u32, rating: f64) -> CustomerRecord {
        CustomerRecord {
            customer_id,
            name: "Abc".to_owned(),
            age: 30,
            mobile_number: 7_000_000_000,
            rating,
        }
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_minimum_rating(&[], DEFAULT_RATING_THRESHOLD).is_empty());
    }

    #[test]
    fn test_filter_threshold_is_inclusive() {
        let records = vec![record(1001, 3.4), record(1002, 3.5), record(1003, 3.6)];
        let kept = filter_by_minimum_rating(&records, DEFAULT_RATING_THRESHOLD);
        let ids: Vec<u32> = kept.iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![1002, 1003]);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let records = vec![
            record(2000, 4.9),
            record(1000, 1.2),
            record(2000, 4.9),
            record(1500, 3.9),
        ];
        let kept = filter_by_minimum_rating(&records, DEFAULT_RATING_THRESHOLD);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], records[0]);
        assert_eq!(kept[1], records[2]);
        assert_eq!(kept[2], records[3]);
        // input untouched
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_filter_every_output_meets_threshold() {
        let records: Vec<CustomerRecord> = (10..=50)
            .map(|tenths| record(1000 + tenths, f64::from(tenths) / 10.0))
            .collect();
        let kept = filter_by_minimum_rating(&records, 2.5);
        assert!(kept.len() <= records.len());
        assert!(kept.iter().all(|r| r.rating >= 2.5));
        let expected = records.iter().filter(|r| r.rating >= 2.5).count();
        assert_eq!(kept.len(), expected);
    }

    #[test]
    fn test_round_rating() {
        assert!((round_rating(3.449_999) - 3.4).abs() < f64::EPSILON);
        assert!((round_rating(4.96) - 5.0).abs() < f64::EPSILON);
        assert_eq!(record(1000, 3.0).rating_label(), "3.0");
    }
}
