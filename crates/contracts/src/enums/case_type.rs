use serde::{Deserialize, Serialize};

/// Types of citizen-service cases. Each one owns a fixed 3-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    #[serde(rename = "GRV")]
    Grievance,
    #[serde(rename = "DSP")]
    Dispute,
    #[serde(rename = "TDL")]
    TempleLetter,
    #[serde(rename = "CMR")]
    ReliefFund,
    #[serde(rename = "EDU")]
    EducationSupport,
    #[serde(rename = "CSR")]
    Csr,
    #[serde(rename = "APP")]
    Appointment,
    #[serde(rename = "RSC")]
    Resource,
    #[serde(rename = "RQT")]
    Request,
}

impl CaseType {
    /// Code used in case identifiers
    pub fn code(&self) -> &'static str {
        match self {
            CaseType::Grievance => "GRV",
            CaseType::Dispute => "DSP",
            CaseType::TempleLetter => "TDL",
            CaseType::ReliefFund => "CMR",
            CaseType::EducationSupport => "EDU",
            CaseType::Csr => "CSR",
            CaseType::Appointment => "APP",
            CaseType::Resource => "RSC",
            CaseType::Request => "RQT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CaseType::Grievance => "Grievance",
            CaseType::Dispute => "Dispute",
            CaseType::TempleLetter => "Temple Darshan Letter",
            CaseType::ReliefFund => "Medical Relief Fund",
            CaseType::EducationSupport => "Education Support",
            CaseType::Csr => "CSR / Industrial Support",
            CaseType::Appointment => "Appointment",
            CaseType::Resource => "Resource",
            CaseType::Request => "Request",
        }
    }

    pub fn all() -> Vec<CaseType> {
        vec![
            CaseType::Grievance,
            CaseType::Dispute,
            CaseType::TempleLetter,
            CaseType::ReliefFund,
            CaseType::EducationSupport,
            CaseType::Csr,
            CaseType::Appointment,
            CaseType::Resource,
            CaseType::Request,
        ]
    }

    /// Parse a 3-letter code. Exact, uppercase match only.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GRV" => Some(CaseType::Grievance),
            "DSP" => Some(CaseType::Dispute),
            "TDL" => Some(CaseType::TempleLetter),
            "CMR" => Some(CaseType::ReliefFund),
            "EDU" => Some(CaseType::EducationSupport),
            "CSR" => Some(CaseType::Csr),
            "APP" => Some(CaseType::Appointment),
            "RSC" => Some(CaseType::Resource),
            "RQT" => Some(CaseType::Request),
            _ => None,
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
