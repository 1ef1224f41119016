// SPDX-License-Identifier: MPL-2.0
//! Company record returned by the analysis service.
//!
//! The service output is produced by scraping plus an LLM, so any field may be
//! missing, `null`, or occasionally a non-string scalar. Decoding is therefore
//! lenient: every absent value becomes an empty string and rendering decides
//! how to present it.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Basic facts and AI analysis about one company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default, deserialize_with = "lenient_section")]
    pub basic_info: BasicInfo,
    #[serde(default, deserialize_with = "lenient_section")]
    pub analysis: Analysis,
}

/// The six literal facts extracted from the company website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub business_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub representative: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tel: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub business_hours: String,
}

/// The three narrative blocks generated by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub investor_analysis: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_seeker_info: String,
}

impl CompanyInfo {
    /// Decodes a response body that is already known not to be an error.
    pub fn from_json(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

/// Identifies one of the basic info fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicField {
    CompanyName,
    BusinessDescription,
    Address,
    Representative,
    Tel,
    BusinessHours,
}

impl BasicField {
    pub const ALL: [BasicField; 6] = [
        BasicField::CompanyName,
        BasicField::BusinessDescription,
        BasicField::Address,
        BasicField::Representative,
        BasicField::Tel,
        BasicField::BusinessHours,
    ];

    #[must_use]
    pub fn value(self, info: &BasicInfo) -> &str {
        match self {
            BasicField::CompanyName => &info.company_name,
            BasicField::BusinessDescription => &info.business_description,
            BasicField::Address => &info.address,
            BasicField::Representative => &info.representative,
            BasicField::Tel => &info.tel,
            BasicField::BusinessHours => &info.business_hours,
        }
    }
}

/// Identifies one of the analysis blocks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisField {
    Summary,
    InvestorAnalysis,
    JobSeekerInfo,
}

impl AnalysisField {
    pub const ALL: [AnalysisField; 3] = [
        AnalysisField::Summary,
        AnalysisField::InvestorAnalysis,
        AnalysisField::JobSeekerInfo,
    ];

    #[must_use]
    pub fn value(self, analysis: &Analysis) -> &str {
        match self {
            AnalysisField::Summary => &analysis.summary,
            AnalysisField::InvestorAnalysis => &analysis.investor_analysis,
            AnalysisField::JobSeekerInfo => &analysis.job_seeker_info,
        }
    }
}

/// Returns whether a JSON value counts as "set" the way the service's
/// clients have always treated it: anything but `null`, `false`, `0` and `""`.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decodes a section object; anything else (`null`, a string, an array)
/// yields an empty section.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        section @ Value::Object(_) => serde_json::from_value(section).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        falsy if !is_truthy(&falsy) => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
