use crate::core::grammar::{
    check_day_in_month, day_literal, gpa_of, month_of, name_of, toefl_of, type_of, year_of,
    FieldResult,
};
use crate::domain::model::{Applicant, BirthDate, Record, StudentType};
use crate::utils::error::{Field, RecordError, Result, RosterError};

/// Fields are separated by exactly one space.
const FIELD_SEPARATOR: char = ' ';

/// Parses one input line into a validated [`Record`].
///
/// Fields are checked in line order and the first failure is returned; nothing
/// after it is inspected. An empty field (from a doubled, leading or trailing
/// separator) counts as missing.
pub fn parse_record(line: &str) -> FieldResult<Record> {
    let mut tokens = line.split(FIELD_SEPARATOR);
    let mut next = |field: Field| match tokens.next() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(RecordError::MissingField(field)),
    };

    let first_name = name_of(next(Field::FirstName)?, Field::FirstName)?;
    let last_name = name_of(next(Field::LastName)?, Field::LastName)?;
    let birth_date = parse_birth_date(next(Field::BirthDate)?)?;
    let gpa = gpa_of(next(Field::Gpa)?)?;
    let student_type = type_of(next(Field::StudentType)?)?;

    let applicant = Applicant::new(first_name, last_name, birth_date, gpa);
    let score = match tokens.next() {
        Some("") => return Err(RecordError::UnexpectedField(String::new())),
        score => score,
    };

    let record = match (student_type, score) {
        (StudentType::Domestic, None) => Record::Domestic(applicant),
        (StudentType::Domestic, Some(_)) => return Err(RecordError::ToeflNotAllowedForDomestic),
        (StudentType::International, None) => {
            return Err(RecordError::ToeflRequiredForInternational)
        }
        (StudentType::International, Some(token)) => Record::International {
            applicant,
            toefl: toefl_of(token)?,
        },
    };

    if let Some(extra) = tokens.next() {
        return Err(RecordError::UnexpectedField(extra.to_string()));
    }

    Ok(record)
}

/// Parses a `Mon-DD-YYYY` token.
///
/// Order of checks: decimal point anywhere, month, day as a literal, year, then
/// the day against the month's length.
pub fn parse_birth_date(token: &str) -> FieldResult<BirthDate> {
    if token.contains('.') {
        return Err(RecordError::DateMustBeInteger(token.to_string()));
    }

    let mut parts = token.splitn(3, '-');
    let month = month_of(parts.next().unwrap_or_default())?;
    let day = parts
        .next()
        .ok_or_else(|| RecordError::InvalidDay(String::new()))
        .and_then(day_literal)?;
    let year = parts
        .next()
        .ok_or_else(|| RecordError::InvalidYear(String::new()))
        .and_then(year_of)?;
    let day = check_day_in_month(day, month, year)?;

    Ok(BirthDate::new(token, month, day, year))
}

/// Parses every line, stopping at the first rejected one.
///
/// `lines` carries the 1-based source line number next to each line so the
/// error points at the file position even when blank lines were skipped.
pub fn parse_records<'a, I>(lines: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut records = Vec::new();

    for (line_number, line) in lines {
        let record = parse_record(line).map_err(|source| RosterError::Record {
            line: line_number,
            source,
        })?;
        tracing::debug!(line = line_number, kind = ?record.student_type(), "record accepted");
        records.push(record);
    }

    Ok(records)
}
