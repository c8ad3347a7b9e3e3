use serde::{Deserialize, Serialize};

use super::identifier::CaseIdentifier;

/// Request to mint a new case identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCaseIdRequest {
    /// 3-letter case type code, e.g. "GRV"
    pub case_type: String,
    /// District name as shown in the form, e.g. "SPSR Nellore"
    pub district: String,
    /// Defaults to the current calendar year
    pub year: Option<i32>,
}

/// Decoded parts of an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseIdParts {
    pub type_code: String,
    pub state_code: String,
    pub district_code: String,
    pub year: i32,
    pub sequence: u64,
    pub checksum: String,
    pub case_type_name: Option<String>,
    pub district_name: String,
}

impl From<&CaseIdentifier> for CaseIdParts {
    fn from(id: &CaseIdentifier) -> Self {
        Self {
            type_code: id.type_code().to_string(),
            state_code: id.state_code().to_string(),
            district_code: id.district_code().to_string(),
            year: id.year(),
            sequence: id.sequence(),
            checksum: id.checksum().to_string(),
            case_type_name: id.case_type().map(|t| t.display_name().to_string()),
            district_name: id.district().display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCaseIdResponse {
    pub id: String,
    pub short_token: String,
    pub short_url: String,
    pub parts: CaseIdParts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseCaseIdResponse {
    pub valid: bool,
    pub parts: CaseIdParts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCaseIdResponse {
    pub id: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub short_token: String,
    pub short_url: String,
}

/// Entry of a code table (case types, districts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeNameDto {
    pub code: String,
    pub name: String,
}

/// Current value of one sequence counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceCounterDto {
    pub case_type: String,
    pub district_code: String,
    pub year: i32,
    pub last_value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::case_type::CaseType;
    use crate::enums::district::District;

    #[test]
    fn test_parts_from_identifier() {
        let id = CaseIdentifier::new(CaseType::TempleLetter, District::Vijayawada, 2024, 42).unwrap();
        let parts = CaseIdParts::from(&id);
        assert_eq!(parts.type_code, "TDL");
        assert_eq!(parts.district_code, "VJW");
        assert_eq!(parts.sequence, 42);
        assert_eq!(parts.checksum, "0O");
        assert_eq!(parts.case_type_name.as_deref(), Some("Temple Darshan Letter"));
        assert_eq!(parts.district_name, "Vijayawada");
    }

    #[test]
    fn test_request_wire_names() {
        let req: IssueCaseIdRequest =
            serde_json::from_str(r#"{"caseType":"GRV","district":"Guntur"}"#).unwrap();
        assert_eq!(req.case_type, "GRV");
        assert_eq!(req.district, "Guntur");
        assert_eq!(req.year, None);
    }
}
