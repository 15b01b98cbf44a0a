use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Format and checksum authority for national personal identification codes.
///
/// The decision steps never inspect checksums themselves; they trust whatever
/// implementation the engine was built with.
pub trait PersonalCodeValidator: Send + Sync {
    fn is_valid(&self, code: &str) -> bool;

    fn gender(&self, code: &str) -> Option<Gender>;
}

pub const CODE_LENGTH: usize = 11;

const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Estonian isikukood: `GYYMMDDSSSC`, where `G` (1-6) carries century and gender and
/// `C` is a modulo-11 check digit. Calendar validity of the date is not checked here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianCodeValidator;

impl EstonianCodeValidator {
    /// Check digit for the first ten digits of a code.
    pub fn check_digit(first_ten: &[u32; 10]) -> u32 {
        let weighted = |weights: &[u32; 10]| {
            first_ten
                .iter()
                .zip(weights)
                .map(|(digit, weight)| digit * weight)
                .sum::<u32>()
                % 11
        };

        match weighted(&PRIMARY_WEIGHTS) {
            10 => match weighted(&SECONDARY_WEIGHTS) {
                10 => 0,
                remainder => remainder,
            },
            remainder => remainder,
        }
    }

    fn digits(code: &str) -> Option<[u32; CODE_LENGTH]> {
        if code.len() != CODE_LENGTH {
            return None;
        }

        let mut digits = [0; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(code.chars()) {
            *slot = ch.to_digit(10)?;
        }

        if !(1..=6).contains(&digits[0]) {
            return None;
        }
        Some(digits)
    }
}

impl PersonalCodeValidator for EstonianCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        let Some(digits) = Self::digits(code) else {
            return false;
        };

        let mut first_ten = [0; 10];
        first_ten.copy_from_slice(&digits[..10]);
        Self::check_digit(&first_ten) == digits[10]
    }

    fn gender(&self, code: &str) -> Option<Gender> {
        let digits = Self::digits(code)?;
        if digits[0] % 2 == 1 {
            Some(Gender::Male)
        } else {
            Some(Gender::Female)
        }
    }
}
