//! Structured case identifiers: `TYPE-ST-DIS-YYYY-SEQSEQ-CK`

pub mod checksum;
pub mod dto;
pub mod identifier;

// Re-exports
pub use checksum::compute_checksum;
pub use identifier::{
    parse, short_token, short_url, validate, CaseIdError, CaseIdentifier, SequenceBucket,
    STATE_CODE,
};
