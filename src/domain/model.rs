use chrono::Month;
use std::fmt;
use std::str::FromStr;

/// Calendar months paired with the only spellings the input grammar accepts.
pub const MONTHS: [(&str, Month); 12] = [
    ("Jan", Month::January),
    ("Feb", Month::February),
    ("Mar", Month::March),
    ("Apr", Month::April),
    ("May", Month::May),
    ("Jun", Month::June),
    ("Jul", Month::July),
    ("Aug", Month::August),
    ("Sep", Month::September),
    ("Oct", Month::October),
    ("Nov", Month::November),
    ("Dec", Month::December),
];

pub fn month_abbreviation(month: Month) -> &'static str {
    MONTHS[month.number_from_month() as usize - 1].0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentType {
    Domestic,
    International,
}

impl StudentType {
    pub fn tag(self) -> &'static str {
        match self {
            StudentType::Domestic => "D",
            StudentType::International => "I",
        }
    }
}

/// A validated birth date. The token is kept as written, so `Jan-05-1990`
/// renders as `Jan-05-1990` even though it compares equal to `Jan-5-1990`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    literal: String,
    month: Month,
    day: u8,
    year: u16,
}

impl BirthDate {
    pub(crate) fn new(literal: &str, month: Month, day: u8, year: u16) -> Self {
        Self {
            literal: literal.to_string(),
            month,
            day,
            year,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// `Mon-D-YYYY` built from the parsed values rather than the literal.
    pub fn normalized(&self) -> String {
        format!(
            "{}-{}-{}",
            month_abbreviation(self.month),
            self.day,
            self.year
        )
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Number of GPA units per point; GPAs are held as exact ten-thousandths.
pub const GPA_SCALE: u32 = 10_000;

/// A validated GPA. Keeps the literal as written so the report echoes the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpa {
    literal: String,
    ten_thousandths: u32,
}

impl Gpa {
    pub(crate) fn new(literal: &str, ten_thousandths: u32) -> Self {
        Self {
            literal: literal.to_string(),
            ten_thousandths,
        }
    }

    pub fn ten_thousandths(&self) -> u32 {
        self.ten_thousandths
    }

    pub fn value(&self) -> f64 {
        f64::from(self.ten_thousandths) / f64::from(GPA_SCALE)
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Fields shared by every admission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    first_name: String,
    last_name: String,
    birth_date: BirthDate,
    gpa: Gpa,
}

impl Applicant {
    pub(crate) fn new(first_name: &str, last_name: &str, birth_date: BirthDate, gpa: Gpa) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date,
            gpa,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn gpa(&self) -> &Gpa {
        &self.gpa
    }
}

/// A TOEFL score known to lie in 0..=120, kept with the token it was read from.
///
/// Only the field grammar can produce one, which keeps out-of-range scores out
/// of [`Record::International`]:
///
/// ```compile_fail
/// use roster_etl::{parse_record, Record};
///
/// let parsed = parse_record("Bob Lee Dec-31-2005 3.9 I 100").unwrap();
/// let forged = Record::International {
///     applicant: parsed.applicant().clone(),
///     toefl: 250,
/// };
/// ```
///
/// ```compile_fail
/// let score = roster_etl::ToeflScore::new("250", 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToeflScore {
    literal: String,
    score: u8,
}

impl ToeflScore {
    pub(crate) fn new(literal: &str, score: u8) -> Self {
        Self {
            literal: literal.to_string(),
            score,
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.score
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for ToeflScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// A validated student admission record.
///
/// Every component type has a crate-private constructor, so a `Record` can
/// only be assembled from values the field grammar accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Domestic(Applicant),
    International {
        applicant: Applicant,
        toefl: ToeflScore,
    },
}

impl Record {
    pub fn applicant(&self) -> &Applicant {
        match self {
            Record::Domestic(applicant) => applicant,
            Record::International { applicant, .. } => applicant,
        }
    }

    pub fn student_type(&self) -> StudentType {
        match self {
            Record::Domestic(_) => StudentType::Domestic,
            Record::International { .. } => StudentType::International,
        }
    }

    pub fn toefl(&self) -> Option<u8> {
        self.toefl_score().map(ToeflScore::as_u8)
    }

    pub fn toefl_score(&self) -> Option<&ToeflScore> {
        match self {
            Record::Domestic(_) => None,
            Record::International { toefl, .. } => Some(toefl),
        }
    }

    pub fn is_domestic(&self) -> bool {
        matches!(self, Record::Domestic(_))
    }
}

/// Which records make it into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    Domestic,
    International,
    #[default]
    Both,
}

impl Selector {
    pub fn includes(self, record: &Record) -> bool {
        match self {
            Selector::Domestic => record.is_domestic(),
            Selector::International => !record.is_domestic(),
            Selector::Both => true,
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    /// Accepts the numeric options `1`, `2`, `3` as well as their names.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "domestic" => Ok(Selector::Domestic),
            "2" | "international" => Ok(Selector::International),
            "3" | "both" => Ok(Selector::Both),
            other => Err(format!(
                "unknown selector '{}': expected 1 (domestic), 2 (international) or 3 (both)",
                other
            )),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Selector::Domestic => "domestic",
            Selector::International => "international",
            Selector::Both => "both",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported format '{}': expected text, csv or json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// A non-blank input line and its 1-based position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

/// Output of the transform stage.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub sorted_records: Vec<Record>,
    pub rendered: String,
    pub rendered_count: usize,
}

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub parsed: usize,
    pub domestic: usize,
    pub international: usize,
    pub rendered: usize,
}
