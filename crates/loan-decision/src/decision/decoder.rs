use std::ops::Range;

use chrono::NaiveDate;

use super::error::DecisionError;
use super::personal_code::{Gender, PersonalCodeValidator, CODE_LENGTH};

/// Attributes encoded in a personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedIdentity {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub segment_key: u16,
}

const CENTURY: Range<usize> = 0..1;
const YEAR: Range<usize> = 1..3;
const MONTH: Range<usize> = 3..5;
const DAY: Range<usize> = 5..7;
const SEGMENT: Range<usize> = 7..11;

pub(crate) fn decode<V>(code: &str, validator: &V) -> Result<DecodedIdentity, DecisionError>
where
    V: PersonalCodeValidator + ?Sized,
{
    if code.len() != CODE_LENGTH || !code.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed(format!("expected {CODE_LENGTH} digits")));
    }

    let century = match field(code, CENTURY) {
        1 | 2 => 1800,
        3 | 4 => 1900,
        5 | 6 => 2000,
        other => return Err(malformed(format!("unknown century indicator {other}"))),
    };

    let year = century + field(code, YEAR);
    let month = field(code, MONTH);
    let day = field(code, DAY);
    let birth_date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        malformed(format!(
            "{year:04}-{month:02}-{day:02} is not a valid calendar date"
        ))
    })?;

    let gender = validator
        .gender(code)
        .ok_or_else(|| malformed("gender could not be determined".to_string()))?;

    Ok(DecodedIdentity {
        birth_date,
        gender,
        segment_key: field(code, SEGMENT) as u16,
    })
}

// Callers guarantee `code` is all ASCII digits, so every slice parses.
fn field(code: &str, range: Range<usize>) -> u32 {
    code[range]
        .bytes()
        .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
}

fn malformed(detail: String) -> DecisionError {
    DecisionError::MalformedCode(detail)
}
