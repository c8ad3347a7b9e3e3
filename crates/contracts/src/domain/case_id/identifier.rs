use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::checksum::compute_checksum;
use crate::enums::case_type::CaseType;
use crate::enums::district::District;

/// Jurisdiction code of this deployment
pub const STATE_CODE: &str = "AP";

/// Largest sequence that fits the 6-digit field
pub const MAX_SEQUENCE: u64 = 999_999;

/// Largest year that fits the 4-digit field
pub const MAX_YEAR: i32 = 9999;

/// Widths of TYPE, STATE, DISTRICT, YEAR, SEQUENCE, CHECKSUM
const FIELD_WIDTHS: [usize; 6] = [3, 2, 3, 4, 6, 2];

/// Length of the canonical string, dashes included
pub const CANONICAL_LEN: usize = 25;

/// Number of trailing characters used for short links
pub const SHORT_TOKEN_LEN: usize = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseIdError {
    #[error("sequence must be positive")]
    ZeroSequence,

    #[error("sequence {0} does not fit in 6 digits")]
    SequenceOverflow(u64),

    #[error("year {0} does not fit in 4 digits")]
    YearOutOfRange(i32),

    #[error("not a case identifier: {0:?}")]
    Malformed(String),
}

/// Counter scope: one independent sequence per (type, district, year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceBucket {
    pub case_type: CaseType,
    pub district: District,
    pub year: i32,
}

impl SequenceBucket {
    pub fn new(case_type: CaseType, district: District, year: i32) -> Self {
        Self {
            case_type,
            district,
            year,
        }
    }
}

impl fmt::Display for SequenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.case_type, self.district.code(), self.year)
    }
}

/// Structured case identifier: `TYPE-ST-DIS-YYYY-SEQSEQ-CK`
///
/// Values built with [`CaseIdentifier::new`] always carry a correct checksum.
/// Values produced by [`parse`] carry whatever checksum the string had; use
/// [`CaseIdentifier::has_valid_checksum`] or [`validate`] to check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseIdentifier {
    type_code: String,
    state_code: String,
    district_code: String,
    year: i32,
    sequence: u64,
    checksum: String,
}

fn build_body(
    type_code: &str,
    state_code: &str,
    district_code: &str,
    year: i32,
    sequence: u64,
) -> String {
    format!(
        "{}-{}-{}-{:04}-{:06}",
        type_code, state_code, district_code, year, sequence
    )
}

impl CaseIdentifier {
    /// Build a new identifier and compute its checksum
    pub fn new(
        case_type: CaseType,
        district: District,
        year: i32,
        sequence: u64,
    ) -> Result<Self, CaseIdError> {
        if sequence == 0 {
            return Err(CaseIdError::ZeroSequence);
        }
        if sequence > MAX_SEQUENCE {
            return Err(CaseIdError::SequenceOverflow(sequence));
        }
        if !(0..=MAX_YEAR).contains(&year) {
            return Err(CaseIdError::YearOutOfRange(year));
        }

        let body = build_body(case_type.code(), STATE_CODE, district.code(), year, sequence);
        Ok(Self {
            type_code: case_type.code().to_string(),
            state_code: STATE_CODE.to_string(),
            district_code: district.code().to_string(),
            year,
            sequence,
            checksum: compute_checksum(&body),
        })
    }

    pub fn from_bucket(bucket: &SequenceBucket, sequence: u64) -> Result<Self, CaseIdError> {
        Self::new(bucket.case_type, bucket.district, bucket.year, sequence)
    }

    pub fn type_code(&self) -> &str {
        &self.type_code
    }

    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn district_code(&self) -> &str {
        &self.district_code
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Known case type, `None` for codes outside the closed set
    pub fn case_type(&self) -> Option<CaseType> {
        CaseType::from_code(&self.type_code)
    }

    /// District for the code, `Unknown` when the code is not in the table
    pub fn district(&self) -> District {
        District::from_code(&self.district_code).unwrap_or(District::Unknown)
    }

    /// Bucket this identifier was allocated from
    pub fn bucket(&self) -> Option<SequenceBucket> {
        self.case_type()
            .map(|case_type| SequenceBucket::new(case_type, self.district(), self.year))
    }

    /// `TYPE-ST-DIS-YYYY-SEQSEQ`, without the checksum
    pub fn body(&self) -> String {
        build_body(
            &self.type_code,
            &self.state_code,
            &self.district_code,
            self.year,
            self.sequence,
        )
    }

    pub fn expected_checksum(&self) -> String {
        compute_checksum(&self.body())
    }

    pub fn has_valid_checksum(&self) -> bool {
        self.checksum.eq_ignore_ascii_case(&self.expected_checksum())
    }

    pub fn short_token(&self) -> String {
        short_token(&self.to_string())
    }

    /// Parse the canonical string form. The checksum is not verified.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != CANONICAL_LEN || !s.is_ascii() {
            return None;
        }

        let fields: Vec<&str> = s.split('-').collect();
        if fields.len() != FIELD_WIDTHS.len() {
            return None;
        }
        if fields
            .iter()
            .zip(FIELD_WIDTHS)
            .any(|(field, width)| field.len() != width)
        {
            return None;
        }

        let letters = |f: &str| f.bytes().all(|b| b.is_ascii_uppercase());
        let digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());
        let alphanumeric = |f: &str| {
            f.bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        };

        if !(letters(fields[0])
            && letters(fields[1])
            && letters(fields[2])
            && digits(fields[3])
            && digits(fields[4])
            && alphanumeric(fields[5]))
        {
            return None;
        }

        Some(Self {
            type_code: fields[0].to_string(),
            state_code: fields[1].to_string(),
            district_code: fields[2].to_string(),
            year: fields[3].parse().ok()?,
            sequence: fields[4].parse().ok()?,
            checksum: fields[5].to_string(),
        })
    }
}

impl fmt::Display for CaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body(), self.checksum)
    }
}

impl FromStr for CaseIdentifier {
    type Err = CaseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CaseIdError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for CaseIdentifier {
    type Error = CaseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseIdentifier> for String {
    fn from(id: CaseIdentifier) -> Self {
        id.to_string()
    }
}

/// Parse a canonical identifier string, `None` when it is not one
pub fn parse(identifier: &str) -> Option<CaseIdentifier> {
    CaseIdentifier::parse(identifier)
}

/// True iff the string is well formed and its checksum matches
pub fn validate(identifier: &str) -> bool {
    parse(identifier).is_some_and(|id| id.has_valid_checksum())
}

/// Last 8 characters of the identifier with dashes removed. Display only.
pub fn short_token(identifier: &str) -> String {
    let compact: Vec<char> = identifier.chars().filter(|c| *c != '-').collect();
    let start = compact.len().saturating_sub(SHORT_TOKEN_LEN);
    compact[start..].iter().collect()
}

/// `https://<host>/t/<token>`
pub fn short_url(host: &str, identifier: &str) -> String {
    format!(
        "https://{}/t/{}",
        host.trim_end_matches('/'),
        short_token(identifier)
    )
}
