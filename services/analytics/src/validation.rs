//! Record validation
//!
//! Parses one raw pipe-delimited line into a canonical `Contribution` or
//! rejects it with a typed reason. Validation is pure: the same line always
//! yields the same result, and nothing here mutates run state.

use chrono::{Datelike, NaiveDate};

use types::errors::RecordError;
use types::ids::{CommitteeId, ZipCode};
use types::numeric::Amount;
use types::record::{schema, Contribution};

/// Validate one raw line and canonicalize it into a `Contribution`
///
/// A line is rejected when any of the following holds:
/// - fewer than 21 pipe-separated fields
/// - empty committee id
/// - non-empty OTHER_ID (contribution came through an intermediary)
/// - empty donor name
/// - zip shorter than five characters
/// - transaction date that is not a real MMDDYYYY calendar date
/// - empty, unparsable, or non-positive (after ceiling) amount
///
/// On success the zip is truncated to five characters, the date reduced to
/// its year, and the amount rounded up to whole dollars. Name and committee
/// id pass through verbatim.
pub fn validate_record(line: &str) -> Result<Contribution, RecordError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < schema::FIELD_COUNT {
        return Err(RecordError::TooFewFields {
            expected: schema::FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let committee =
        CommitteeId::try_new(fields[schema::CMTE_ID]).ok_or(RecordError::MissingCommittee)?;

    if !fields[schema::OTHER_ID].is_empty() {
        return Err(RecordError::LinkedTransfer);
    }

    let name = fields[schema::NAME];
    if name.is_empty() {
        return Err(RecordError::MissingName);
    }

    let raw_zip = fields[schema::ZIP_CODE];
    let zip = ZipCode::try_new(raw_zip).ok_or_else(|| RecordError::InvalidZip {
        raw: raw_zip.to_string(),
    })?;

    let raw_date = fields[schema::TRANSACTION_DT];
    let year = transaction_year(raw_date).ok_or_else(|| RecordError::InvalidDate {
        raw: raw_date.to_string(),
    })?;

    let raw_amount = fields[schema::TRANSACTION_AMT];
    if raw_amount.is_empty() {
        return Err(RecordError::MissingAmount);
    }
    let amount = Amount::parse(raw_amount)?;

    Ok(Contribution {
        committee,
        donor_name: name.to_string(),
        zip,
        year,
        amount,
    })
}

/// Parse an MMDDYYYY date field down to its calendar year
fn transaction_year(raw: &str) -> Option<u16> {
    let date = NaiveDate::parse_from_str(raw, "%m%d%Y").ok()?;
    u16::try_from(date.year()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::errors::AmountError;

    /// Build a full 21-field line with the six consumed fields filled in
    fn make_line(cmte: &str, name: &str, zip: &str, date: &str, amt: &str, other: &str) -> String {
        let mut fields = vec![""; schema::FIELD_COUNT];
        fields[schema::CMTE_ID] = cmte;
        fields[schema::NAME] = name;
        fields[schema::ZIP_CODE] = zip;
        fields[schema::TRANSACTION_DT] = date;
        fields[schema::TRANSACTION_AMT] = amt;
        fields[schema::OTHER_ID] = other;
        fields.join("|")
    }

    #[test]
    fn test_valid_record_canonicalized() {
        let line = make_line("C00384516", "DOE, JOHN", "902104356", "01152016", "100.40", "");
        let record = validate_record(&line).unwrap();

        assert_eq!(record.committee.as_str(), "C00384516");
        assert_eq!(record.donor_name, "DOE, JOHN");
        assert_eq!(record.zip.as_str(), "90210");
        assert_eq!(record.year, 2016);
        assert_eq!(record.amount, Amount::from_u64(101));
    }

    #[test]
    fn test_too_few_fields() {
        let result = validate_record("C00384516|DOE, JOHN|90210");
        assert_eq!(
            result.unwrap_err(),
            RecordError::TooFewFields {
                expected: 21,
                actual: 3
            }
        );
    }

    #[test]
    fn test_missing_committee() {
        let line = make_line("", "DOE, JOHN", "90210", "01152016", "100", "");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::MissingCommittee
        );
    }

    #[test]
    fn test_other_id_set() {
        let line = make_line("C00384516", "DOE, JOHN", "90210", "01152016", "100", "X1");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::LinkedTransfer
        );
    }

    #[test]
    fn test_missing_name() {
        let line = make_line("C00384516", "", "90210", "01152016", "100", "");
        assert_eq!(validate_record(&line).unwrap_err(), RecordError::MissingName);
    }

    #[test]
    fn test_short_zip() {
        let line = make_line("C00384516", "DOE, JOHN", "9021", "01152016", "100", "");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::InvalidZip {
                raw: "9021".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_date() {
        // Feb 30 does not exist
        let line = make_line("C00384516", "DOE, JOHN", "90210", "02302016", "100", "");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::InvalidDate {
                raw: "02302016".to_string()
            }
        );

        let line = make_line("C00384516", "DOE, JOHN", "90210", "", "100", "");
        assert!(matches!(
            validate_record(&line).unwrap_err(),
            RecordError::InvalidDate { .. }
        ));
    }

    #[test]
    fn test_missing_amount() {
        let line = make_line("C00384516", "DOE, JOHN", "90210", "01152016", "", "");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::MissingAmount
        );
    }

    #[test]
    fn test_non_positive_amount() {
        let line = make_line("C00384516", "DOE, JOHN", "90210", "01152016", "-25", "");
        assert_eq!(
            validate_record(&line).unwrap_err(),
            RecordError::Amount(AmountError::NonPositive)
        );
    }

    #[test]
    fn test_name_passed_through_verbatim() {
        let line = make_line("C00384516", "o'brien, pat  jr.", "90210", "01152016", "40", "");
        let record = validate_record(&line).unwrap();
        assert_eq!(record.donor_name, "o'brien, pat  jr.");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let line = make_line("C00384516", "DOE, JOHN", "902104356", "01152016", "100.40", "");
        assert_eq!(validate_record(&line), validate_record(&line));

        let bad = make_line("C00384516", "DOE, JOHN", "90210", "13012016", "100", "");
        assert_eq!(validate_record(&bad), validate_record(&bad));
    }

    #[test]
    fn test_extra_fields_accepted() {
        // More than 21 fields is fine; trailing fields are ignored
        let mut line = make_line("C00384516", "DOE, JOHN", "90210", "01152016", "100", "");
        line.push_str("|extra");
        assert!(validate_record(&line).is_ok());
    }
}
