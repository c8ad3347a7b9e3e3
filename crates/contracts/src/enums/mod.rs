pub mod case_type;
pub mod district;

pub use case_type::CaseType;
pub use district::{resolve_district_code, District};
