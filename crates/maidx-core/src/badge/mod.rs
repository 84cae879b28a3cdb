//! Badge classification for (song, tier) pairs.
//!
//! - `Badge` - the nine badge keys and their display labels
//! - `BadgeSet` - one boolean per badge, computed by `classify`

mod classify;

pub use classify::*;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

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
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// Below 13.0
    Xiaoge,
    /// Master chart of a current-generation release
    Xinge,
    /// Master chart of a first-generation release
    Zhenchaoxi,
    /// Break-heavy
    Juezan,
    /// Slide-heavy
    Slides,
    /// Fitted difficulty well above the official constant
    Dilei,
    /// Re:Master chart
    Baipu,
    /// High note count
    Xingxing,
    /// Above 14.5
    Duijue,
}

impl Badge {
    /// Key used in query strings and JSON
    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Xiaoge => "小歌",
            Self::Xinge => "新歌",
            Self::Zhenchaoxi => "真超檄",
            Self::Juezan => "绝赞",
            Self::Slides => "星星",
            Self::Dilei => "地雷",
            Self::Baipu => "白谱",
            Self::Xingxing => "猩猩",
            Self::Duijue => "对决",
        }
    }

    /// Rule summary for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::Xiaoge => "ds < 13.0",
            Self::Xinge => "Master chart from 舞萌DX 2023-2025",
            Self::Zhenchaoxi => "Master chart from maimai through GreeN PLUS",
            Self::Juezan => "more than 40 breaks, ds <= 14.5",
            Self::Slides => "slides above 20% of notes",
            Self::Dilei => "fitted difficulty > ds + 0.2, 12.0 <= ds < 14.0",
            Self::Baipu => "Re:Master chart",
            Self::Xingxing => "more than 1000 notes",
            Self::Duijue => "ds > 14.5",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Badges held by one (song, tier) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeSet {
    pub xiaoge: bool,
    pub xinge: bool,
    pub zhenchaoxi: bool,
    pub juezan: bool,
    pub slides: bool,
    pub dilei: bool,
    pub baipu: bool,
    pub xingxing: bool,
    pub duijue: bool,
}

impl BadgeSet {
    pub fn contains(&self, badge: Badge) -> bool {
        match badge {
            Badge::Xiaoge => self.xiaoge,
            Badge::Xinge => self.xinge,
            Badge::Zhenchaoxi => self.zhenchaoxi,
            Badge::Juezan => self.juezan,
            Badge::Slides => self.slides,
            Badge::Dilei => self.dilei,
            Badge::Baipu => self.baipu,
            Badge::Xingxing => self.xingxing,
            Badge::Duijue => self.duijue,
        }
    }

    /// True when every badge in `required` is set. An empty requirement always holds.
    pub fn contains_all<'a>(&self, required: impl IntoIterator<Item = &'a Badge>) -> bool {
        required.into_iter().all(|badge| self.contains(*badge))
    }

    /// Set badges in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Badge> + '_ {
        Badge::iter().filter(move |badge| self.contains(*badge))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl FromIterator<Badge> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = Badge>>(iter: I) -> Self {
        let mut set = Self::default();
        for badge in iter {
            let slot = match badge {
                Badge::Xiaoge => &mut set.xiaoge,
                Badge::Xinge => &mut set.xinge,
                Badge::Zhenchaoxi => &mut set.zhenchaoxi,
                Badge::Juezan => &mut set.juezan,
                Badge::Slides => &mut set.slides,
                Badge::Dilei => &mut set.dilei,
                Badge::Baipu => &mut set.baipu,
                Badge::Xingxing => &mut set.xingxing,
                Badge::Duijue => &mut set.duijue,
            };
            *slot = true;
        }
        set
    }
}
