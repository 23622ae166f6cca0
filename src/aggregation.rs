//! Totals and maxima used to scale the charts.

use time::Month;

use crate::{Error, grouping::Group, record::Record};

/// The largest single-day amount in `records`.
///
/// Returns [Error::EmptyDataset] if `records` is empty. A maximum of zero is
/// returned as is; [crate::ColorScale] maps everything to its first colour in
/// that case.
pub fn max_amount(records: &[Record]) -> Result<u64, Error> {
    records
        .iter()
        .map(|record| record.amount)
        .max()
        .ok_or(Error::EmptyDataset)
}

/// The largest group total in `groups`.
///
/// Returns [Error::EmptyDataset] if `groups` is empty.
pub fn max_total<K>(groups: &[Group<K>]) -> Result<u64, Error> {
    groups
        .iter()
        .map(Group::total)
        .max()
        .ok_or(Error::EmptyDataset)
}

/// Formats a zero-based month index as a three-letter abbreviation.
///
/// # Returns
/// The month name (e.g., "Jan", "Feb"), or an empty string for an index
/// past December.
pub fn month_label(month_index: u8) -> &'static str {
    match Month::try_from(month_index.saturating_add(1)) {
        Ok(Month::January) => "Jan",
        Ok(Month::February) => "Feb",
        Ok(Month::March) => "Mar",
        Ok(Month::April) => "Apr",
        Ok(Month::May) => "May",
        Ok(Month::June) => "Jun",
        Ok(Month::July) => "Jul",
        Ok(Month::August) => "Aug",
        Ok(Month::September) => "Sep",
        Ok(Month::October) => "Oct",
        Ok(Month::November) => "Nov",
        Ok(Month::December) => "Dec",
        Err(_) => "",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        aggregation::{max_amount, max_total, month_label},
        grouping::Group,
        record::Record,
    };

    #[test]
    fn max_amount_finds_largest_day() {
        let records = vec![
            Record::new(date!(2011 - 01 - 03), 100),
            Record::new(date!(2011 - 01 - 04), 1200),
            Record::new(date!(2011 - 02 - 01), 50),
        ];

        assert_eq!(max_amount(&records), Ok(1200));
    }

    #[test]
    fn max_amount_of_empty_dataset_is_an_error() {
        assert_eq!(max_amount(&[]), Err(Error::EmptyDataset));
    }

    #[test]
    fn max_total_compares_group_sums() {
        let groups = vec![
            Group {
                key: 1u8,
                records: vec![
                    Record::new(date!(2011 - 01 - 03), 10),
                    Record::new(date!(2011 - 01 - 04), 10),
                ],
            },
            Group {
                key: 2u8,
                records: vec![Record::new(date!(2011 - 01 - 10), 15)],
            },
        ];

        assert_eq!(max_total(&groups), Ok(20));
    }

    #[test]
    fn max_total_of_no_groups_is_an_error() {
        let groups: Vec<Group<u8>> = vec![];

        assert_eq!(max_total(&groups), Err(Error::EmptyDataset));
    }

    #[test]
    fn month_label_creates_three_letter_abbreviations() {
        let labels: Vec<&str> = [0, 1, 11].into_iter().map(month_label).collect();

        assert_eq!(labels, vec!["Jan", "Feb", "Dec"]);
        assert_eq!(month_label(12), "");
    }
}
