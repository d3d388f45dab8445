use crate::domain::model::{OutputFormat, Record, Selector};
use crate::utils::error::Result;
use serde::Serialize;

const CSV_HEADER: [&str; 6] = ["first_name", "last_name", "birth_date", "gpa", "type", "toefl"];

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    first_name: &'a str,
    last_name: &'a str,
    birth_date: &'a str,
    gpa: &'a str,
    #[serde(rename = "type")]
    student_type: &'static str,
    toefl: Option<u8>,
}

impl<'a> From<&'a Record> for ReportRow<'a> {
    fn from(record: &'a Record) -> Self {
        let applicant = record.applicant();
        Self {
            first_name: applicant.first_name(),
            last_name: applicant.last_name(),
            birth_date: applicant.birth_date().as_str(),
            gpa: applicant.gpa().as_str(),
            student_type: record.student_type().tag(),
            toefl: record.toefl(),
        }
    }
}

/// `<first> <last> <Mon>-<DD>-<YYYY> <gpa> D` or `... I <toefl>`, with every
/// field echoed exactly as it appeared in the input.
pub fn render_line(record: &Record) -> String {
    let applicant = record.applicant();
    let mut line = format!(
        "{} {} {} {} {}",
        applicant.first_name(),
        applicant.last_name(),
        applicant.birth_date(),
        applicant.gpa(),
        record.student_type().tag()
    );
    if let Some(toefl) = record.toefl_score() {
        line.push(' ');
        line.push_str(toefl.as_str());
    }
    line
}

/// Renders the selected records, in the order given, in `format`.
pub fn render_report(
    records: &[Record],
    selector: Selector,
    format: OutputFormat,
) -> Result<String> {
    let selected = records.iter().filter(|record| selector.includes(record));

    match format {
        OutputFormat::Text => Ok(selected.map(|record| render_line(record) + "\n").collect()),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            let mut wrote_any = false;
            for record in selected {
                writer.serialize(ReportRow::from(record))?;
                wrote_any = true;
            }
            if !wrote_any {
                writer.write_record(CSV_HEADER)?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Json => {
            let rows: Vec<ReportRow<'_>> = selected.map(ReportRow::from).collect();
            Ok(serde_json::to_string_pretty(&rows)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_record;

    fn sample() -> Vec<Record> {
        vec![
            parse_record("Alice Smith Jan-5-1990 3.5 D").unwrap(),
            parse_record("Bob Lee Dec-31-2005 3.9999 I 100").unwrap(),
        ]
    }

    #[test]
    fn test_render_line_templates() {
        let records = sample();
        assert_eq!(render_line(&records[0]), "Alice Smith Jan-5-1990 3.5 D");
        assert_eq!(render_line(&records[1]), "Bob Lee Dec-31-2005 3.9999 I 100");
    }

    #[test]
    fn test_render_line_echoes_padded_date_tokens() {
        let record = parse_record("Alice Smith Jan-05-01990 3.50 D").unwrap();
        assert_eq!(render_line(&record), "Alice Smith Jan-05-01990 3.50 D");

        let record = parse_record("Alice Smith Jan-05-1990 3.5 I 095").unwrap();
        assert_eq!(record.toefl(), Some(95));
        assert_eq!(render_line(&record), "Alice Smith Jan-05-1990 3.5 I 095");
    }

    #[test]
    fn test_text_report_by_selector() {
        let records = sample();

        assert_eq!(
            render_report(&records, Selector::Domestic, OutputFormat::Text).unwrap(),
            "Alice Smith Jan-5-1990 3.5 D\n"
        );
        assert_eq!(
            render_report(&records, Selector::International, OutputFormat::Text).unwrap(),
            "Bob Lee Dec-31-2005 3.9999 I 100\n"
        );
        assert_eq!(
            render_report(&records, Selector::Both, OutputFormat::Text).unwrap(),
            "Alice Smith Jan-5-1990 3.5 D\nBob Lee Dec-31-2005 3.9999 I 100\n"
        );
        assert_eq!(
            render_report(&records[..1], Selector::International, OutputFormat::Text).unwrap(),
            ""
        );
    }

    #[test]
    fn test_csv_report() {
        let csv = render_report(&sample(), Selector::Both, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "first_name,last_name,birth_date,gpa,type,toefl");
        assert_eq!(lines[1], "Alice,Smith,Jan-5-1990,3.5,D,");
        assert_eq!(lines[2], "Bob,Lee,Dec-31-2005,3.9999,I,100");
    }

    #[test]
    fn test_csv_report_without_rows_keeps_header() {
        let csv = render_report(&[], Selector::Both, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "first_name,last_name,birth_date,gpa,type,toefl\n");
    }

    #[test]
    fn test_json_report() {
        let json = render_report(&sample(), Selector::International, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["first_name"], "Bob");
        assert_eq!(value[0]["gpa"], "3.9999");
        assert_eq!(value[0]["type"], "I");
        assert_eq!(value[0]["toefl"], 100);
    }

    #[test]
    fn test_csv_report_keeps_date_literal() {
        let records = vec![parse_record("Alice Smith Mar-09-1999 3.5 D").unwrap()];
        let csv = render_report(&records, Selector::Both, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().nth(1), Some("Alice,Smith,Mar-09-1999,3.5,D,"));
    }
}
