use crate::domain::model::InputLine;
use crate::utils::error::{Result, RosterError};

/// Decodes raw input bytes into the lines handed to the record parser.
///
/// A zero-byte input is rejected outright; otherwise lines are split on `\n`
/// (a trailing `\r` is dropped) and blank lines are skipped.
pub fn decode_input(path: &str, bytes: &[u8]) -> Result<Vec<InputLine>> {
    if bytes.is_empty() {
        return Err(RosterError::EmptyInput {
            path: path.to_string(),
        });
    }

    let content = std::str::from_utf8(bytes).map_err(|e| {
        RosterError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    Ok(split_lines(content))
}

pub fn split_lines(content: &str) -> Vec<InputLine> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| InputLine {
            number: index + 1,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_skips_blank_lines_and_keeps_numbers() {
        let lines = split_lines("Alice Smith Jan-5-1990 3.5 D\r\n\n   \nBob Lee Dec-31-2005 3.9 I 100\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].text, "Alice Smith Jan-5-1990 3.5 D");
        assert_eq!(lines[1].number, 4);
    }

    #[test]
    fn test_decode_input_rejects_empty_file() {
        match decode_input("students.txt", b"") {
            Err(RosterError::EmptyInput { path }) => assert_eq!(path, "students.txt"),
            other => panic!("expected empty input error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_input_rejects_invalid_utf8() {
        assert!(matches!(
            decode_input("students.txt", &[0xff, 0xfe, b'\n']),
            Err(RosterError::IoError(_))
        ));
    }

    #[test]
    fn test_newline_only_file_yields_no_lines() {
        assert!(decode_input("students.txt", b"\n").unwrap().is_empty());
    }
}
