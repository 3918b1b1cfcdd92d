//! Durable slot enumeration.

/// Named durable slot mirrored by the session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Slot {
    /// The serialized post collection
    #[display("posts")]
    Posts,
    /// The serialized competitive-intelligence collection
    #[display("intelligence")]
    Intelligence,
}

impl Slot {
    /// Convert to the string representation used for file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Posts => "posts",
            Slot::Intelligence => "intelligence",
        }
    }
}

impl std::str::FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posts" => Ok(Slot::Posts),
            "intelligence" => Ok(Slot::Intelligence),
            _ => Err(format!("Unknown slot: {}", s)),
        }
    }
}
