pub mod case_id;
pub mod case_sequence;
