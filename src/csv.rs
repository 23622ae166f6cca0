//! Parses the daily hire counts CSV into [Record]s.

use std::collections::HashSet;

use time::Date;

use crate::{
    Error,
    record::{DATE_FORMAT, Record},
};

const DATE_HEADER: &str = "date";
const AMOUNT_HEADER: &str = "amount";

/// Parses CSV text with a header row and the columns `date` and `amount`.
///
/// Columns are found by header name, so extra columns and any column order
/// are accepted. Dates must be formatted as `YYYY-MM-DD`. Amounts are
/// non-negative integers that may contain thousands separators, e.g.
/// `"1,234"`.
///
/// The rows are returned in input order. The first malformed row fails the
/// whole parse: returns [Error::InvalidDate], [Error::InvalidAmount] or
/// [Error::DuplicateDate] with the zero-based data row, or
/// [Error::InvalidCSV] if the text is not valid CSV.
pub fn parse_csv(text: &str) -> Result<Vec<Record>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    let date_column = find_column(headers, DATE_HEADER)?;
    let amount_column = find_column(headers, AMOUNT_HEADER)?;

    let mut records = Vec::new();
    let mut seen_dates = HashSet::new();

    for (row, result) in reader.records().enumerate() {
        let line = result?;
        let date_field = line.get(date_column).unwrap_or_default();
        let amount_field = line.get(amount_column).unwrap_or_default();

        let date = parse_date(date_field).ok_or_else(|| Error::InvalidDate {
            row,
            value: date_field.to_owned(),
        })?;

        if !seen_dates.insert(date) {
            return Err(Error::DuplicateDate {
                row,
                value: date_field.to_owned(),
            });
        }

        let amount = parse_amount(amount_field).ok_or_else(|| Error::InvalidAmount {
            row,
            value: amount_field.to_owned(),
        })?;

        records.push(Record::new(date, amount));
    }

    tracing::debug!("Parsed {} records from CSV", records.len());

    Ok(records)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::MissingColumn(name.to_owned()))
}

fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, &DATE_FORMAT).ok()
}

/// Strips thousands separators and parses the remainder as a count.
///
/// Negative and fractional values are rejected, as is whitespace inside the
/// number.
fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        csv::{parse_amount, parse_csv},
        record::Record,
    };

    #[test]
    fn parses_rows_in_input_order() {
        let text = "date,amount\n\
            2011-01-03,100\n\
            2011-01-04,\"1,200\"\n\
            2011-02-01,50\n";

        let records = parse_csv(text).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new(date!(2011 - 01 - 03), 100),
                Record::new(date!(2011 - 01 - 04), 1200),
                Record::new(date!(2011 - 02 - 01), 50),
            ]
        );
    }

    #[test]
    fn does_not_sort_rows() {
        let text = "date,amount\n2012-05-01,5\n2011-05-01,7\n";

        let records = parse_csv(text).unwrap();

        assert_eq!(records[0].date, date!(2012 - 05 - 01));
        assert_eq!(records[1].date, date!(2011 - 05 - 01));
    }

    #[test]
    fn amount_sum_matches_column_sum() {
        let amounts = ["9,310", "12,001", "0", "44", "1,000,000"];
        let mut text = String::from("date,amount\n");
        for (i, amount) in amounts.iter().enumerate() {
            text.push_str(&format!("2015-03-{:02},\"{amount}\"\n", i + 1));
        }
        let expected: u64 = amounts
            .iter()
            .map(|amount| amount.replace(',', "").parse::<u64>().unwrap())
            .sum();

        let records = parse_csv(&text).unwrap();

        assert_eq!(records.iter().map(|record| record.amount).sum::<u64>(), expected);
    }

    #[test]
    fn finds_columns_by_header_name() {
        let text = "Amount, Weather ,Date\n321,sunny,2014-07-01\n";

        let records = parse_csv(text).unwrap();

        assert_eq!(records, vec![Record::new(date!(2014 - 07 - 01), 321)]);
    }

    #[test]
    fn missing_amount_column_is_an_error() {
        let result = parse_csv("date,count\n2014-07-01,1\n");

        assert_eq!(result, Err(Error::MissingColumn("amount".to_owned())));
    }

    #[test]
    fn bad_date_fails_whole_parse() {
        // Valid rows before the bad one are not returned: the whole load fails.
        let text = "date,amount\n2011-01-03,100\n03/01/2011,100\n";

        let result = parse_csv(text);

        assert_eq!(
            result,
            Err(Error::InvalidDate {
                row: 1,
                value: "03/01/2011".to_owned()
            })
        );
    }

    #[test]
    fn negative_amount_is_an_error() {
        let result = parse_csv("date,amount\n2011-01-03,-5\n");

        assert_eq!(
            result,
            Err(Error::InvalidAmount {
                row: 0,
                value: "-5".to_owned()
            })
        );
    }

    #[test]
    fn fractional_and_empty_amounts_are_rejected() {
        assert_eq!(parse_amount("12.5"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("1,2,3"), Some(123));
    }

    #[test]
    fn inner_whitespace_in_amount_is_rejected() {
        assert_eq!(parse_amount("1 234"), None);
        assert_eq!(
            parse_csv("date,amount\n2011-01-03, 1 234 \n"),
            Err(Error::InvalidAmount {
                row: 0,
                value: "1 234".to_owned()
            })
        );
    }

    #[test]
    fn repeated_date_fails_whole_parse() {
        let text = "date,amount\n2011-01-03,100\n2011-01-04,80\n2011-01-03,100\n";

        let result = parse_csv(text);

        assert_eq!(
            result,
            Err(Error::DuplicateDate {
                row: 2,
                value: "2011-01-03".to_owned()
            })
        );
    }

    #[test]
    fn ragged_row_is_invalid_csv() {
        let result = parse_csv("date,amount\n2011-01-03,100,extra\n");

        assert!(matches!(result, Err(Error::InvalidCSV(_))));
    }

    #[test]
    fn header_only_yields_no_records() {
        assert_eq!(parse_csv("date,amount\n"), Ok(vec![]));
    }
}
