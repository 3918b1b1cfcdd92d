//! Social network enumeration.

use serde::{Deserialize, Serialize};

/// Target social network for a planned publication.
///
/// Wire values match the persisted document shape (`"LinkedIn"`,
/// `"Facebook"`, `"Instagram"`).
///
/// # Examples
///
/// ```
/// use vitrine_core::SocialNetwork;
///
/// assert_eq!(format!("{}", SocialNetwork::LinkedIn), "LinkedIn");
/// assert_eq!("facebook".parse::<SocialNetwork>().unwrap(), SocialNetwork::Facebook);
/// ```
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
pub enum SocialNetwork {
    /// LinkedIn (analytical tone)
    LinkedIn,
    /// Facebook (familial tone)
    Facebook,
    /// Instagram (aesthetic tone)
    Instagram,
}

impl SocialNetwork {
    /// Convert to the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
        }
    }
}

impl std::str::FromStr for SocialNetwork {
    type Err = String;

    /// Case-insensitive parse; the gateway's `network` field is free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linkedin" => Ok(SocialNetwork::LinkedIn),
            "facebook" => Ok(SocialNetwork::Facebook),
            "instagram" => Ok(SocialNetwork::Instagram),
            _ => Err(format!("Unknown social network: {}", s)),
        }
    }
}
