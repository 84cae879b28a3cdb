use crate::badge::BadgeSet;
use crate::chart::{ChartStatsIndex, SongRecord, Tier};
use crate::config::{threshold, version};

/// Classify one tier of a song.
///
/// Every badge is evaluated independently. Missing statistics, a missing
/// chart or an empty note vector leave the dependent badges unset.
pub fn classify(song: &SongRecord, tier: Tier, stats: &ChartStatsIndex) -> BadgeSet {
    // NaN keeps every ds comparison false when the tier has no constant
    let ds = song.ds(tier).unwrap_or(f64::NAN);
    let (total_notes, break_count, slide_ratio) = match song.chart(tier) {
        Some(chart) => (
            chart.total_notes(),
            chart.break_count(),
            chart.slide_ratio(),
        ),
        None => (0, 0, None),
    };
    let is_master = tier == Tier::Master;

    BadgeSet {
        xiaoge: ds < threshold::XIAOGE_DS_BELOW,
        xinge: is_master && version::is_new_song(song.release_group()),
        zhenchaoxi: is_master && version::is_original(song.release_group()),
        juezan: break_count > threshold::JUEZAN_BREAKS_ABOVE && ds <= threshold::JUEZAN_DS_MAX,
        slides: slide_ratio.is_some_and(|ratio| ratio > threshold::SLIDE_RATIO_ABOVE),
        dilei: stats.fit_diff(&song.id, tier).is_some_and(|fit_diff| {
            fit_diff - ds > threshold::DILEI_FIT_MARGIN
                && (threshold::DILEI_DS_MIN..threshold::DILEI_DS_BELOW).contains(&ds)
        }),
        baipu: tier == Tier::ReMaster,
        xingxing: total_notes > threshold::XINGXING_NOTES_ABOVE,
        duijue: ds > threshold::DUIJUE_DS_ABOVE,
    }
}
