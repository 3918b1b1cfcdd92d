//! Campaign request type handed to the gateway.

use vitrine_core::SocialNetwork;

/// Everything the gateway needs to draft one editorial calendar.
///
/// The orchestrator builds one request per campaign: the target networks, the
/// selected publication days, a textual digest of the current competitive
/// intelligence, and the user's creative brief (the gateway substitutes a
/// generic brief when absent).
///
/// # Examples
///
/// ```
/// use vitrine_core::SocialNetwork;
/// use vitrine_interface::CampaignRequest;
///
/// let request = CampaignRequest::builder()
///     .networks(vec![SocialNetwork::LinkedIn, SocialNetwork::Facebook])
///     .days(vec!["Lundi".to_string(), "Mardi".to_string()])
///     .intelligence_digest("SONIBANK: digitalisation".to_string())
///     .brief(Some("Campagne récolte".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.days().len(), 2);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct CampaignRequest {
    /// Networks to draft posts for
    networks: Vec<SocialNetwork>,
    /// Weekday labels to draft posts for
    days: Vec<String>,
    /// Textual digest of the current competitive intelligence
    #[builder(default)]
    intelligence_digest: String,
    /// User's creative brief; the gateway falls back to a generic brief
    #[builder(default)]
    brief: Option<String>,
}

impl CampaignRequest {
    /// Creates a new campaign request builder.
    pub fn builder() -> CampaignRequestBuilder {
        CampaignRequestBuilder::default()
    }
}
