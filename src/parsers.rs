//! This module implements pattern-driven date-time formatting and parsing.
//!
//! A pattern is a token string in the widely used `SimpleDateFormat` subset:
//!
//! | Token  | Field                    |
//! |--------|--------------------------|
//! | `yyyy` | 4-digit year             |
//! | `yy`   | 2-digit year (2000-2099) |
//! | `MM`   | month of year (01..12)   |
//! | `dd`   | day of month             |
//! | `HH`   | hour of day (00..23)     |
//! | `mm`   | minute                   |
//! | `ss`   | second                   |
//! | `SSS`  | millisecond              |
//!
//! A run of a recognized pattern letter of any other length renders
//! zero-padded to the run length and consumes exactly that many digits when
//! parsing. Every other character is a literal that must match itself.

use crate::{
    error::ParseError,
    iso::IsoDateTime,
    DateTimeResult,
};
use alloc::{format, string::String, vec::Vec};
use writeable::{LengthHint, Writeable};

/// The calendar field named by a pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl FieldKind {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'd' => Some(Self::Day),
            'H' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'S' => Some(Self::Millisecond),
            _ => None,
        }
    }
}

/// One lexed unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternItem {
    /// A numeric field with its token run length.
    Field(FieldKind, u8),
    /// A character that renders and matches literally.
    Literal(char),
}

/// The lexed form of [`crate::DEFAULT_DATETIME_FORMAT`], kept static so the
/// `Display` path does not re-lex on every call.
pub(crate) const DEFAULT_PATTERN: [PatternItem; 11] = [
    PatternItem::Field(FieldKind::Year, 4),
    PatternItem::Literal('-'),
    PatternItem::Field(FieldKind::Month, 2),
    PatternItem::Literal('-'),
    PatternItem::Field(FieldKind::Day, 2),
    PatternItem::Literal(' '),
    PatternItem::Field(FieldKind::Hour, 2),
    PatternItem::Literal(':'),
    PatternItem::Field(FieldKind::Minute, 2),
    PatternItem::Literal(':'),
    PatternItem::Field(FieldKind::Second, 2),
];

/// Lexes a pattern into its items. Lexing never fails; unrecognized letters
/// are literals.
pub(crate) fn lex(pattern: &str) -> Vec<PatternItem> {
    let mut items = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(kind) = FieldKind::from_letter(c) else {
            items.push(PatternItem::Literal(c));
            continue;
        };
        let mut width = 1u8;
        while chars.peek() == Some(&c) {
            chars.next();
            width = width.saturating_add(1);
        }
        items.push(PatternItem::Field(kind, width));
    }
    items
}

// ==== Formatting ====

/// A [`Writeable`] rendering of a field record under a lexed pattern.
pub(crate) struct FormattableDateTime<'a> {
    pub(crate) iso: IsoDateTime,
    pub(crate) items: &'a [PatternItem],
}

impl FormattableDateTime<'_> {
    fn field_value(&self, kind: FieldKind, width: u8) -> i64 {
        match kind {
            FieldKind::Year if width == 2 => i64::from(self.iso.date.year).rem_euclid(100),
            FieldKind::Year => i64::from(self.iso.date.year),
            FieldKind::Month => i64::from(self.iso.date.month),
            FieldKind::Day => i64::from(self.iso.date.day),
            FieldKind::Hour => i64::from(self.iso.time.hour),
            FieldKind::Minute => i64::from(self.iso.time.minute),
            FieldKind::Second => i64::from(self.iso.time.second),
            FieldKind::Millisecond => i64::from(self.iso.time.millisecond),
        }
    }
}

impl Writeable for FormattableDateTime<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        for item in self.items {
            match *item {
                PatternItem::Literal(c) => sink.write_char(c)?,
                PatternItem::Field(kind, width) => {
                    write_padded(self.field_value(kind, width), width, sink)?;
                }
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let mut hint = LengthHint::exact(0);
        for item in self.items {
            hint = hint
                + match *item {
                    PatternItem::Literal(c) => LengthHint::exact(c.len_utf8()),
                    PatternItem::Field(kind, width) => {
                        let value = self.field_value(kind, width);
                        let sign = usize::from(value < 0);
                        LengthHint::exact(
                            decimal_digits(value.unsigned_abs()).max(usize::from(width)) + sign,
                        )
                    }
                };
        }
        hint
    }
}

/// Formats a field record with the given pattern.
pub(crate) fn format_iso(iso: IsoDateTime, pattern: &str) -> String {
    let items = lex(pattern);
    FormattableDateTime { iso, items: &items }
        .write_to_string()
        .into_owned()
}

fn decimal_digits(mut value: u64) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Writes `value` zero-padded to at least `width` digits. Values wider than
/// `width` render in full.
fn write_padded<W: core::fmt::Write + ?Sized>(
    value: i64,
    width: u8,
    sink: &mut W,
) -> core::fmt::Result {
    if value < 0 {
        sink.write_char('-')?;
    }
    let magnitude = value.unsigned_abs();
    for _ in decimal_digits(magnitude)..usize::from(width) {
        sink.write_char('0')?;
    }
    magnitude.write_to(sink)
}

// ==== Parsing ====

/// Raw parsed field values prior to balancing. Fields a pattern does not
/// cover keep their epoch defaults.
#[derive(Debug)]
struct RawFields {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
}

impl Default for RawFields {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

fn mismatch(offset: usize, expected: &str) -> ParseError {
    #[cfg(feature = "log")]
    log::trace!("pattern mismatch at offset {offset}: expected {expected}");
    ParseError::syntax().with_message(format!("expected {expected} at offset {offset}"))
}

/// Parses `text` against `pattern`, producing a balanced field record.
///
/// Numeric tokens consume exactly their run length in ASCII digits, literals
/// must match themselves, and the whole input must be consumed. Parsed field
/// values balance leniently afterwards, so `2013-01-32` parses to Feb 1.
pub(crate) fn parse_pattern(text: &str, pattern: &str) -> DateTimeResult<IsoDateTime> {
    let items = lex(pattern);
    let mut fields = RawFields::default();
    let mut rest = text;

    for item in &items {
        let offset = text.len() - rest.len();
        match *item {
            PatternItem::Literal(expected) => {
                let mut chars = rest.chars();
                match chars.next() {
                    Some(c) if c == expected => rest = chars.as_str(),
                    _ => return Err(mismatch(offset, &format!("{expected:?}"))),
                }
            }
            PatternItem::Field(kind, width) => {
                let width = usize::from(width);
                let digits = rest.as_bytes();
                if digits.len() < width || !digits[..width].iter().all(u8::is_ascii_digit) {
                    return Err(mismatch(offset, &format!("{width} digits")));
                }
                let mut value = 0i64;
                for &digit in &digits[..width] {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(digit - b'0')))
                        .ok_or_else(|| {
                            ParseError::range()
                                .with_message(format!("field value overflow at offset {offset}"))
                        })?;
                }
                rest = &rest[width..];
                match kind {
                    // A two-digit year maps into 2000-2099.
                    FieldKind::Year if width == 2 => fields.year = 2000 + value,
                    FieldKind::Year => fields.year = value,
                    FieldKind::Month => fields.month = value,
                    FieldKind::Day => fields.day = value,
                    FieldKind::Hour => fields.hour = value,
                    FieldKind::Minute => fields.minute = value,
                    FieldKind::Second => fields.second = value,
                    FieldKind::Millisecond => fields.millisecond = value,
                }
            }
        }
    }

    if !rest.is_empty() {
        return Err(mismatch(text.len() - rest.len(), "end of input"));
    }

    Ok(IsoDateTime::balance(
        fields.year,
        fields.month,
        fields.day,
        fields.hour,
        fields.minute,
        fields.second,
        fields.millisecond,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_DATETIME_FORMAT;

    #[test]
    fn lex_default_pattern() {
        assert_eq!(lex(DEFAULT_DATETIME_FORMAT), DEFAULT_PATTERN);
    }

    #[test]
    fn lex_groups_runs_and_literals() {
        assert_eq!(
            lex("yyyy/M S!"),
            [
                PatternItem::Field(FieldKind::Year, 4),
                PatternItem::Literal('/'),
                PatternItem::Field(FieldKind::Month, 1),
                PatternItem::Literal(' '),
                PatternItem::Field(FieldKind::Millisecond, 1),
                PatternItem::Literal('!'),
            ]
        );
        // Digits and unrecognized letters are literals.
        assert_eq!(
            lex("12x"),
            [
                PatternItem::Literal('1'),
                PatternItem::Literal('2'),
                PatternItem::Literal('x'),
            ]
        );
    }

    #[test]
    fn format_patterns() {
        let iso = IsoDateTime::balance(2013, 1, 2, 3, 4, 5, 6);
        assert_eq!(format_iso(iso, DEFAULT_DATETIME_FORMAT), "2013-01-02 03:04:05");
        assert_eq!(
            format_iso(iso, "yyyy-MM-dd HH:mm:ss.SSS"),
            "2013-01-02 03:04:05.006"
        );
        assert_eq!(format_iso(iso, "yy-MM-dd"), "13-01-02");
        // No date tokens at all: the pattern renders as its literals.
        assert_eq!(format_iso(iso, "123"), "123");
    }

    #[test]
    fn parse_round_trip() {
        let iso = parse_pattern("2013-01-02 03:04:05", DEFAULT_DATETIME_FORMAT).unwrap();
        assert_eq!((iso.date.year, iso.date.month, iso.date.day), (2013, 1, 2));
        assert_eq!(
            (iso.time.hour, iso.time.minute, iso.time.second),
            (3, 4, 5)
        );

        let iso = parse_pattern("13-02-03", "yy-MM-dd").unwrap();
        assert_eq!((iso.date.year, iso.date.month, iso.date.day), (2013, 2, 3));
    }

    #[test]
    fn parse_defaults_uncovered_fields() {
        let iso = parse_pattern("10:20", "HH:mm").unwrap();
        assert_eq!((iso.date.year, iso.date.month, iso.date.day), (1970, 1, 1));
        assert_eq!((iso.time.hour, iso.time.minute), (10, 20));

        // A literal-only pattern parses to the epoch record.
        let iso = parse_pattern("123", "123").unwrap();
        assert_eq!(iso, IsoDateTime::default());
    }

    #[test]
    fn parse_balances_overflowed_fields() {
        let iso = parse_pattern("2013-01-32", "yyyy-MM-dd").unwrap();
        assert_eq!((iso.date.year, iso.date.month, iso.date.day), (2013, 2, 1));
    }

    #[test]
    fn parse_rejects_mismatches() {
        // Too few year digits for the default pattern.
        assert!(parse_pattern("12-039", DEFAULT_DATETIME_FORMAT).is_err());
        // Wrong literal.
        assert!(parse_pattern("2013/01/02", "yyyy-MM-dd").is_err());
        // Trailing input.
        assert!(parse_pattern("2013-01-02x", "yyyy-MM-dd").is_err());
        // Truncated input.
        assert!(parse_pattern("2013-01", "yyyy-MM-dd").is_err());
        // Non-digit where digits are required.
        assert!(parse_pattern("2013-0a-02", "yyyy-MM-dd").is_err());
    }
}
