use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

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
    FromRepr,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Tier {
    #[strum(serialize = "Basic")]
    Basic = 0,
    #[strum(serialize = "Advanced")]
    Advanced = 1,
    #[strum(serialize = "Expert")]
    Expert = 2,
    #[strum(serialize = "Master")]
    Master = 3,
    #[strum(serialize = "Re:Master")]
    ReMaster = 4,
}

impl Tier {
    /// Number of tiers every song carries
    pub const COUNT: usize = 5;

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Short label for one-line listings
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Basic => "BAS",
            Self::Advanced => "ADV",
            Self::Expert => "EXP",
            Self::Master => "MAS",
            Self::ReMaster => "ReM",
        }
    }

    /// Get the color code for the tier (for JSON output)
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Basic => "#22C55E",    // Green
            Self::Advanced => "#EAB308", // Yellow
            Self::Expert => "#EF4444",   // Red
            Self::Master => "#A855F7",   // Purple
            Self::ReMaster => "#FFFFFF", // White (purple text)
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_tier_from_index() {
        assert_eq!(Tier::from_index(0), Some(Tier::Basic));
        assert_eq!(Tier::from_index(3), Some(Tier::Master));
        assert_eq!(Tier::from_index(4), Some(Tier::ReMaster));
        assert_eq!(Tier::from_index(5), None);
        assert_eq!(Tier::from_index(300), None);
    }

    #[test]
    fn test_tier_iter_matches_count() {
        let tiers: Vec<Tier> = Tier::iter().collect();
        assert_eq!(tiers.len(), Tier::COUNT);
        for (i, tier) in tiers.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::ReMaster.name(), "Re:Master");
        assert_eq!(Tier::from_str("Re:Master").unwrap(), Tier::ReMaster);
        assert_eq!(Tier::Expert.to_string(), "Expert");
    }
}
