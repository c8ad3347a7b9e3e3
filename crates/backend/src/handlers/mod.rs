pub mod case_id;
pub mod reference;
