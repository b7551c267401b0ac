//! Delimited record codec.
//!
//! Every persisted record is a single line whose values are joined by
//! [`DELIMITER`]. Field names are never written; they are supplied again at
//! decode time and matched positionally.

use crate::error::{QuizError, Result};

/// Separates the values of a record. Never allowed inside a value.
pub const DELIMITER: char = '|';

/// Encode `(name, value)` pairs into one line, in the order given.
///
/// Names only document the call site. Values are not checked for the
/// delimiter; callers validate user input before it gets here.
pub fn encode(fields: &[(&str, &str)]) -> String {
    let mut line = String::new();
    for (i, (_, value)) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(value);
    }
    line.push('\n');
    line
}

/// A decoded record: named fields plus any trailing parts beyond them.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
    rest: Vec<String>,
    line: usize,
}

impl Record {
    /// Value of a named field.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| QuizError::format(self.line, format!("unknown field `{name}`")))
    }

    /// Integer value of a named field.
    pub fn get_u32(&self, name: &str) -> Result<u32> {
        let raw = self.get(name)?;
        raw.parse().map_err(|_| {
            QuizError::format(self.line, format!("field `{name}` is not an integer: {raw:?}"))
        })
    }

    /// Floating-point value of a named field.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        let raw = self.get(name)?;
        raw.parse().map_err(|_| {
            QuizError::format(self.line, format!("field `{name}` is not a number: {raw:?}"))
        })
    }

    /// Parts beyond the named fields, in line order.
    pub fn rest(&self) -> &[String] {
        &self.rest
    }

    /// 1-based line the record was decoded from.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Decode a single line against ordered field names.
///
/// `line` is the 1-based position used in error messages.
pub fn decode(text: &str, fieldnames: &[&str], line: usize) -> Result<Record> {
    let mut parts = text.split(DELIMITER);
    let mut fields = Vec::with_capacity(fieldnames.len());
    for name in fieldnames {
        match parts.next() {
            Some(value) => fields.push((name.to_string(), value.to_string())),
            None => {
                return Err(QuizError::format(
                    line,
                    format!(
                        "expected {} fields, missing `{name}`",
                        fieldnames.len()
                    ),
                ))
            }
        }
    }

    Ok(Record {
        fields,
        rest: parts.map(str::to_string).collect(),
        line,
    })
}

/// Decode every non-blank line of `text`.
///
/// Lines are trimmed first. The first malformed line fails the whole call.
pub fn decode_all(text: &str, fieldnames: &[&str]) -> Result<Vec<Record>> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|(n, l)| decode(l, fieldnames, n))
        .collect()
}

/// A type with a flat, single-line record representation.
pub trait Recordable: Sized {
    /// Field names in on-disk order.
    const FIELDS: &'static [&'static str];

    /// Field values, one per entry in [`Self::FIELDS`].
    fn to_values(&self) -> Vec<String>;

    /// Build a value from a decoded record.
    fn from_record(record: &Record) -> Result<Self>;

    /// Encode as one line, trailing newline included.
    fn to_line(&self) -> String {
        let values = self.to_values();
        let pairs: Vec<(&str, &str)> = Self::FIELDS
            .iter()
            .copied()
            .zip(values.iter().map(String::as_str))
            .collect();
        encode(&pairs)
    }
}

/// Decode every record in `text` as `T`.
pub fn decode_records<T: Recordable>(text: &str) -> Result<Vec<T>> {
    decode_all(text, T::FIELDS)?
        .iter()
        .map(T::from_record)
        .collect()
}

/// Encode a slice of records into file contents.
pub fn encode_records<T: Recordable>(items: &[T]) -> String {
    items.iter().map(Recordable::to_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_FIELDS: &[&str] = &["username", "password", "name", "age", "year_group"];

    #[test]
    fn encode_joins_in_order() {
        let line = encode(&[("b", "bravo"), ("a", "alpha"), ("c", "charlie")]);
        assert_eq!(line, "bravo|alpha|charlie\n");
    }

    #[test]
    fn encode_does_not_validate() {
        let line = encode(&[("a", "x|y")]);
        assert_eq!(line, "x|y\n");
    }

    #[test]
    fn decode_zips_fields() {
        let rec = decode("abc12|pw|Abcdef|12|Y7", USER_FIELDS, 1).unwrap();
        assert_eq!(rec.get("username").unwrap(), "abc12");
        assert_eq!(rec.get("year_group").unwrap(), "Y7");
        assert_eq!(rec.get_u32("age").unwrap(), 12);
        assert!(rec.rest().is_empty());
    }

    #[test]
    fn decode_keeps_trailing_parts() {
        let rec = decode("2+2|4|3|5|22", &["question", "correct"], 1).unwrap();
        assert_eq!(rec.get("correct").unwrap(), "4");
        assert_eq!(rec.rest(), &["3", "5", "22"]);
    }

    #[test]
    fn decode_missing_field_is_format_error() {
        let err = decode("alice|pw|Alice|30", USER_FIELDS, 4).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("year_group"));
        assert!(err.to_string().starts_with("line 4"));
    }

    #[test]
    fn decode_non_numeric_is_format_error() {
        let rec = decode("abc|pw|Abc|old|Y7", USER_FIELDS, 1).unwrap();
        assert!(rec.get_u32("age").unwrap_err().is_format());

        let rec = decode("abc|Math|Easy|lots", &["u", "c", "d", "percentage"], 2).unwrap();
        assert!(rec.get_f64("percentage").unwrap_err().is_format());
    }

    #[test]
    fn decode_all_skips_blank_lines() {
        let text = "\na|b\n   \nc|d\n\n";
        let recs = decode_all(text, &["x", "y"]).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].get("x").unwrap(), "c");
        assert_eq!(recs[1].line(), 4);
    }

    #[test]
    fn decode_all_fails_whole_text() {
        let text = "a|b\nc\ne|f\n";
        let err = decode_all(text, &["x", "y"]).unwrap_err();
        assert!(matches!(err, QuizError::Format { line: 2, .. }));
    }

    #[test]
    fn roundtrip_preserves_values() {
        let values = ["abc12", "secret", "Abcdef", "12", "Year 7"];
        let pairs: Vec<(&str, &str)> = USER_FIELDS.iter().copied().zip(values).collect();
        let line = encode(&pairs);
        let rec = decode(line.trim_end(), USER_FIELDS, 1).unwrap();
        for (name, value) in pairs {
            assert_eq!(rec.get(name).unwrap(), value);
        }
    }
}
