//! Company classification: buckets a company name into size/type/focus by
//! substring matching against fixed name-fragment lists.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Startup,
    #[serde(rename = "Mid-Size")]
    MidSize,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    pub size: CompanySize,
    #[serde(rename = "type")]
    pub company_type: String,
    pub focus: String,
}

const ENTERPRISES: &[&str] = &[
    "google",
    "amazon",
    "microsoft",
    "meta",
    "facebook",
    "netflix",
    "apple",
    "adobe",
    "salesforce",
    "oracle",
    "ibm",
    "tcs",
    "infosys",
    "wipro",
    "accenture",
    "capgemini",
    "cognizant",
    "deloitte",
    "goldman sachs",
    "jpmorgan",
    "morgan stanley",
    "flipkart",
    "paytm",
    "uber",
    "ola",
    "zomato",
    "swiggy",
];

/// Enterprise names that run a services (rather than product) model.
const SERVICE_BASED: &[&str] = &["tcs", "infosys", "wipro", "accenture", "cognizant", "capgemini"];

const MID_SIZE: &[&str] = &[
    "zoho",
    "freshworks",
    "browserstack",
    "razorpay",
    "cred",
    "zerodha",
    "groww",
    "postman",
    "hackerearth",
    "hackerrank",
];

/// Fragments that mark an unknown company as an agency/services shop.
const AGENCY_HINTS: &[&str] = &["tech", "labs", "solutions"];

pub const DEFAULT_COMPANY_NAME: &str = "Target Company";
pub const DEFAULT_INDUSTRY: &str = "Technology";

pub const PRODUCT_BASED: &str = "Product-based";
pub const SERVICE_BASED_TYPE: &str = "Service-based";
pub const AGENCY_TYPE: &str = "Service/Agency";

const ENTERPRISE_PRODUCT_FOCUS: &str = "Data Structures, Algorithms & System Design scalability";
const ENTERPRISE_SERVICE_FOCUS: &str = "Aptitude, Core CS Fundamentals & Communication";
const MID_SIZE_FOCUS: &str = "Product specific skills, System Design & Clean Code";
const STARTUP_PRODUCT_FOCUS: &str = "Practical problem solving & Full-stack depth";
const STARTUP_AGENCY_FOCUS: &str = "Rapid development, adaptability & specific stack expertise";

fn matches_any(name: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|f| name.contains(f))
}

/// Classifies `company` into a [`CompanyIntel`]. Pure; an empty name falls
/// through to the startup/product default.
pub fn classify_company(company: &str) -> CompanyIntel {
    let name = company.trim().to_lowercase();

    let (size, company_type, focus) = if matches_any(&name, ENTERPRISES) {
        if matches_any(&name, SERVICE_BASED) {
            (
                CompanySize::Enterprise,
                SERVICE_BASED_TYPE,
                ENTERPRISE_SERVICE_FOCUS,
            )
        } else {
            (
                CompanySize::Enterprise,
                PRODUCT_BASED,
                ENTERPRISE_PRODUCT_FOCUS,
            )
        }
    } else if matches_any(&name, MID_SIZE) {
        (CompanySize::MidSize, PRODUCT_BASED, MID_SIZE_FOCUS)
    } else if matches_any(&name, AGENCY_HINTS) {
        (CompanySize::Startup, AGENCY_TYPE, STARTUP_AGENCY_FOCUS)
    } else {
        (CompanySize::Startup, PRODUCT_BASED, STARTUP_PRODUCT_FOCUS)
    };

    debug!(company = %company, ?size, company_type, "Classified company");

    CompanyIntel {
        name: if company.trim().is_empty() {
            DEFAULT_COMPANY_NAME.to_string()
        } else {
            company.trim().to_string()
        },
        industry: DEFAULT_INDUSTRY.to_string(),
        size,
        company_type: company_type.to_string(),
        focus: focus.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_is_enterprise_product() {
        let intel = classify_company("Google");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.company_type, PRODUCT_BASED);
        assert!(intel.focus.contains("System Design"));
    }

    #[test]
    fn test_infosys_is_enterprise_service() {
        let intel = classify_company("Infosys Ltd");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.company_type, SERVICE_BASED_TYPE);
        assert!(intel.focus.contains("Aptitude"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(classify_company("MICROSOFT").size, CompanySize::Enterprise);
    }

    #[test]
    fn test_razorpay_is_mid_size() {
        let intel = classify_company("Razorpay");
        assert_eq!(intel.size, CompanySize::MidSize);
        assert_eq!(intel.company_type, PRODUCT_BASED);
    }

    #[test]
    fn test_unknown_is_startup_product() {
        let intel = classify_company("Quillbyte");
        assert_eq!(intel.size, CompanySize::Startup);
        assert_eq!(intel.company_type, PRODUCT_BASED);
        assert_eq!(intel.focus, STARTUP_PRODUCT_FOCUS);
    }

    #[test]
    fn test_unknown_with_agency_hint_is_service() {
        let intel = classify_company("Pixelwave Labs");
        assert_eq!(intel.size, CompanySize::Startup);
        assert_eq!(intel.company_type, AGENCY_TYPE);
    }

    #[test]
    fn test_empty_name_uses_defaults() {
        let intel = classify_company("");
        assert_eq!(intel.size, CompanySize::Startup);
        assert_eq!(intel.name, DEFAULT_COMPANY_NAME);
        assert_eq!(intel.industry, DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_enterprise_checked_before_mid_size() {
        // "cred" is mid-size, but "accenture" wins as the first list checked.
        let intel = classify_company("Accenture Credit Services");
        assert_eq!(intel.size, CompanySize::Enterprise);
    }

    #[test]
    fn test_classification_is_deterministic() {
        assert_eq!(classify_company("Zoho Corp"), classify_company("Zoho Corp"));
    }

    #[test]
    fn test_size_serializes_with_display_names() {
        assert_eq!(
            serde_json::to_string(&CompanySize::MidSize).unwrap(),
            r#""Mid-Size""#
        );
        let json = serde_json::to_value(classify_company("Google")).unwrap();
        assert_eq!(json["type"], "Product-based");
        assert_eq!(json["size"], "Enterprise");
    }
}
