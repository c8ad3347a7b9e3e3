use serde::{Deserialize, Serialize};

/// Code used when a district name is not in the table
pub const UNKNOWN_DISTRICT_CODE: &str = "UNK";

/// Districts known to the portal, plus the `Unknown` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    #[serde(rename = "NLR")]
    SpsrNellore,
    #[serde(rename = "GTR")]
    Guntur,
    #[serde(rename = "VJW")]
    Vijayawada,
    #[serde(rename = "VSP")]
    Visakhapatnam,
    #[serde(rename = "KRS")]
    Krishna,
    #[serde(rename = "WGD")]
    WestGodavari,
    #[serde(rename = "EGD")]
    EastGodavari,
    #[serde(rename = "CTR")]
    Chittoor,
    #[serde(rename = "KDP")]
    Kadapa,
    #[serde(rename = "ATP")]
    Anantapur,
    #[serde(rename = "KNL")]
    Kurnool,
    #[serde(rename = "PKM")]
    Prakasam,
    #[serde(rename = "SKL")]
    Srikakulam,
    #[serde(rename = "VZM")]
    Vizianagaram,
    #[serde(rename = "UNK")]
    Unknown,
}

impl District {
    pub fn code(&self) -> &'static str {
        match self {
            District::SpsrNellore => "NLR",
            District::Guntur => "GTR",
            District::Vijayawada => "VJW",
            District::Visakhapatnam => "VSP",
            District::Krishna => "KRS",
            District::WestGodavari => "WGD",
            District::EastGodavari => "EGD",
            District::Chittoor => "CTR",
            District::Kadapa => "KDP",
            District::Anantapur => "ATP",
            District::Kurnool => "KNL",
            District::Prakasam => "PKM",
            District::Srikakulam => "SKL",
            District::Vizianagaram => "VZM",
            District::Unknown => UNKNOWN_DISTRICT_CODE,
        }
    }

    /// Name as it appears in the portal forms
    pub fn display_name(&self) -> &'static str {
        match self {
            District::SpsrNellore => "SPSR Nellore",
            District::Guntur => "Guntur",
            District::Vijayawada => "Vijayawada",
            District::Visakhapatnam => "Visakhapatnam",
            District::Krishna => "Krishna",
            District::WestGodavari => "West Godavari",
            District::EastGodavari => "East Godavari",
            District::Chittoor => "Chittoor",
            District::Kadapa => "Kadapa",
            District::Anantapur => "Anantapur",
            District::Kurnool => "Kurnool",
            District::Prakasam => "Prakasam",
            District::Srikakulam => "Srikakulam",
            District::Vizianagaram => "Vizianagaram",
            District::Unknown => "Unknown",
        }
    }

    /// Known districts, without the fallback
    pub fn all() -> Vec<District> {
        vec![
            District::SpsrNellore,
            District::Guntur,
            District::Vijayawada,
            District::Visakhapatnam,
            District::Krishna,
            District::WestGodavari,
            District::EastGodavari,
            District::Chittoor,
            District::Kadapa,
            District::Anantapur,
            District::Kurnool,
            District::Prakasam,
            District::Srikakulam,
            District::Vizianagaram,
        ]
    }

    /// Resolve a district from its form name. Never fails: anything not in the
    /// table becomes `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        District::all()
            .into_iter()
            .find(|d| d.display_name() == name)
            .unwrap_or(District::Unknown)
    }

    /// Parse a 3-letter code. `UNK` maps to `Unknown`.
    pub fn from_code(code: &str) -> Option<Self> {
        if code == UNKNOWN_DISTRICT_CODE {
            return Some(District::Unknown);
        }
        District::all().into_iter().find(|d| d.code() == code)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, District::Unknown)
    }
}

/// District code for a form name, `UNK` when the name is not recognised
pub fn resolve_district_code(district_name: &str) -> &'static str {
    District::from_name(district_name).code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(resolve_district_code("SPSR Nellore"), "NLR");
        assert_eq!(resolve_district_code("Guntur"), "GTR");
        assert_eq!(resolve_district_code("Vijayawada"), "VJW");
        assert_eq!(resolve_district_code("Visakhapatnam"), "VSP");
        assert_eq!(resolve_district_code("Krishna"), "KRS");
        assert_eq!(resolve_district_code("West Godavari"), "WGD");
        assert_eq!(resolve_district_code("East Godavari"), "EGD");
        assert_eq!(resolve_district_code("Chittoor"), "CTR");
        assert_eq!(resolve_district_code("Kadapa"), "KDP");
        assert_eq!(resolve_district_code("Anantapur"), "ATP");
        assert_eq!(resolve_district_code("Kurnool"), "KNL");
        assert_eq!(resolve_district_code("Prakasam"), "PKM");
        assert_eq!(resolve_district_code("Srikakulam"), "SKL");
        assert_eq!(resolve_district_code("Vizianagaram"), "VZM");
    }

    #[test]
    fn test_unknown_fallback_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(resolve_district_code("Nonexistent District"), "UNK");
        }
        assert_eq!(resolve_district_code(""), "UNK");
        assert!(District::from_name("Hyderabad").is_unknown());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(District::from_name("  Guntur "), District::Guntur);
        assert_eq!(District::from_name("guntur"), District::Unknown);
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let mut codes: Vec<&str> = District::all().iter().map(|d| d.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), District::all().len());

        for district in District::all() {
            assert_eq!(District::from_code(district.code()), Some(district));
        }
        assert_eq!(District::from_code("UNK"), Some(District::Unknown));
        assert_eq!(District::from_code("XYZ"), None);
    }
}
