//! Competitive-intelligence records.

use serde::{Deserialize, Serialize};

/// Institution category used by the competitive watch.
///
/// Wire values carry spaces (`"Money Transfer"`, `"Agricultural Bank"`) to
/// match the gateway's response vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum IntelligenceCategory {
    /// Commercial bank
    #[display("Bank")]
    Bank,
    /// Fintech / mobile-money operator
    #[display("Fintech")]
    Fintech,
    /// Money-transfer service
    #[display("Money Transfer")]
    #[serde(rename = "Money Transfer")]
    MoneyTransfer,
    /// Agricultural bank (the institution's direct peers)
    #[display("Agricultural Bank")]
    #[serde(rename = "Agricultural Bank")]
    AgriculturalBank,
}

/// A citation backing an intelligence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Human-readable source title
    pub title: String,
    /// Source URI
    pub uri: String,
}

/// One analyzed competitor institution.
///
/// Records are created only from gateway responses and wholesale-replaced on
/// refresh, never individually mutated.
///
/// # Examples
///
/// ```
/// use vitrine_core::{IntelligenceCategory, IntelligenceRecord};
///
/// let record = IntelligenceRecord {
///     institution: "SONIBANK".to_string(),
///     category: IntelligenceCategory::Bank,
///     trends: vec!["digitalisation".to_string()],
///     last_campaigns: "Campagne mobile banking".to_string(),
///     sources: vec![],
/// };
/// assert_eq!(record.trends.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceRecord {
    /// Institution name
    pub institution: String,
    /// Institution category
    pub category: IntelligenceCategory,
    /// Ordered marketing theme strings
    pub trends: Vec<String>,
    /// Free-form observation about recent campaigns
    pub last_campaigns: String,
    /// Citations, possibly empty
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}
