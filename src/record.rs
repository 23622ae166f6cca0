//! The daily observation that every chart is built from.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The format of dates in the input CSV and in serialized output.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One calendar day's bicycle hire count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The day of the observation, in UTC.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The number of hires on that day.
    pub amount: u64,
}

impl Record {
    /// Create a record for `date`.
    pub fn new(date: Date, amount: u64) -> Self {
        Self { date, amount }
    }

    /// The zero-based month index (January = 0).
    pub fn month_index(&self) -> u8 {
        u8::from(self.date.month()) - 1
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::Record;

    #[test]
    fn serializes_date_as_iso_string() {
        let record = Record::new(date!(2011 - 01 - 04), 1200);

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"date":"2011-01-04","amount":1200}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }

    #[test]
    fn month_index_starts_at_zero() {
        assert_eq!(Record::new(date!(2011 - 01 - 31), 1).month_index(), 0);
        assert_eq!(Record::new(date!(2011 - 12 - 01), 1).month_index(), 11);
    }
}
