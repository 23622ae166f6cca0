//! Groups records by year, month and week.
//!
//! Every grouping keeps keys in the order they are first seen and records in
//! input order, so flattening the groups of a chronological dataset gives the
//! dataset back unchanged.

use std::{collections::HashMap, hash::Hash};

use serde::Serialize;
use time::{Date, Duration};

use crate::record::Record;

/// A bucket of records that share a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<K> {
    /// The shared year, month index or week number.
    pub key: K,
    /// The records in input order.
    pub records: Vec<Record>,
}

/// The records of one calendar year, keyed by the year.
pub type YearGroup = Group<i32>;

/// The records of one month within a year, keyed by the month index 0-11.
pub type MonthGroup = Group<u8>;

/// The records of one week within a year, keyed by [week_number].
pub type WeekGroup = Group<u8>;

impl<K> Group<K> {
    /// The sum of the amounts of the records in the group.
    pub fn total(&self) -> u64 {
        self.records.iter().map(|record| record.amount).sum()
    }
}

/// Groups `records` by `key_of`, keeping first-seen key order.
fn group_by<K, F>(records: &[Record], key_of: F) -> Vec<Group<K>>
where
    K: Copy + Eq + Hash,
    F: Fn(&Record) -> K,
{
    let mut groups: Vec<Group<K>> = Vec::new();
    let mut index_of_key: HashMap<K, usize> = HashMap::new();

    for record in records {
        let key = key_of(record);
        let index = *index_of_key.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                records: Vec::new(),
            });
            groups.len() - 1
        });

        groups[index].records.push(*record);
    }

    groups
}

/// Groups records by calendar year.
pub fn group_by_year(records: &[Record]) -> Vec<YearGroup> {
    group_by(records, |record| record.date.year())
}

/// Groups the records of a year by month index (January = 0).
pub fn group_by_month(year: &YearGroup) -> Vec<MonthGroup> {
    group_by(&year.records, Record::month_index)
}

/// Groups the records of a year by [week_number].
///
/// Days at the start of January may belong to week 52 or 53 and days at the
/// end of December may belong to week 1. Those days join the group with the
/// same key, wherever that group was first seen.
pub fn group_by_week(year: &YearGroup) -> Vec<WeekGroup> {
    group_by(&year.records, |record| week_number(record.date))
}

/// The ISO-like week number of `date`.
///
/// The date is moved to the Thursday of its Monday-to-Sunday week, and the
/// week number is the count of (partial) weeks from January 1st of the
/// Thursday's year up to the Thursday.
pub fn week_number(date: Date) -> u8 {
    let day_of_week = match date.weekday().number_days_from_sunday() {
        0 => 7,
        day => day,
    };
    let thursday = date + Duration::days(4 - i64::from(day_of_week));
    // Whole days since January 1st of the Thursday's year, plus one.
    let day_of_year = thursday.ordinal();

    day_of_year.div_ceil(7) as u8
}
