//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::badge::{Badge, BadgeSet};
use crate::catalog::{CatalogPage, FilteredChart, FilteredSong};
use crate::chart::{ChartStatsIndex, SongRecord, Tier};
use crate::query::ViewState;

const BORDER_WIDTH: usize = 50;

/// Format one catalog page: a line per collapsed song, a block per expanded one,
/// then the pager line.
pub fn format_page_console(
    page: &CatalogPage<FilteredSong<'_>>,
    view: &ViewState,
    stats: &ChartStatsIndex,
    cover_base_url: &str,
) -> String {
    let mut output = String::new();

    if page.items.is_empty() {
        let _ = writeln!(output, "  {}", "No songs match.".dimmed());
    }
    for item in &page.items {
        let expanded = view.is_expanded(&item.song.id);
        output.push_str(&format_song_console(item, stats, cover_base_url, expanded));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", format_pager(page));

    output
}

/// Format one song, collapsed to a single line or expanded to a detail block
pub fn format_song_console(
    item: &FilteredSong<'_>,
    stats: &ChartStatsIndex,
    cover_base_url: &str,
    expanded: bool,
) -> String {
    if expanded {
        format_song_detail(item, stats, cover_base_url)
    } else {
        format_song_line(item)
    }
}

/// Build line: "#834 PANDORA PARADOXXX - 削除  MAS 14.2  ReM 14.8"
fn format_song_line(item: &FilteredSong<'_>) -> String {
    let song = item.song;
    let tiers: Vec<String> = item
        .charts
        .iter()
        .map(|chart| {
            let label = format!(
                "{} {}",
                chart.tier.short_name(),
                format_ds(song.ds(chart.tier))
            );
            format_colored_tier(chart.tier, &label)
        })
        .collect();

    format!(
        "{} {} - {}  {}\n",
        format!("#{}", song.id).dimmed(),
        song.title.bold(),
        song.basic_info.artist,
        tiers.join("  ")
    )
}

fn format_song_detail(item: &FilteredSong<'_>, stats: &ChartStatsIndex, cover_base_url: &str) -> String {
    let song = item.song;
    let mut output = String::new();
    let border = "━".repeat(BORDER_WIDTH);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(
        output,
        "  {} {}",
        song.title.bold(),
        format!("#{}", song.id).dimmed()
    );
    let _ = writeln!(output, "  {}", song.basic_info.artist);
    let _ = writeln!(
        output,
        "  Genre: {} | Type: {} | Version: {} | BPM: {}",
        song.genre(),
        song.chart_type,
        song.release_group(),
        song.basic_info.bpm
    );
    let _ = writeln!(output, "  Cover: {}", song.cover_url(cover_base_url));
    if !song.aliases().is_empty() {
        let _ = writeln!(output, "  Aliases: {}", song.aliases().join(", "));
    }
    let _ = writeln!(output, "{}", border.dimmed());

    for chart in &item.charts {
        output.push_str(&format_chart_detail(song, chart, stats));
    }

    output
}

fn format_chart_detail(song: &SongRecord, chart: &FilteredChart, stats: &ChartStatsIndex) -> String {
    let mut output = String::new();
    let tier = chart.tier;
    let fit_diff = stats
        .fit_diff(&song.id, tier)
        .map(|fit| format!("{:.2}", fit))
        .unwrap_or_else(|| "-".to_string());

    let heading = format!(
        "{:<4} {:<9}",
        song.level(tier).unwrap_or("?"),
        tier.name()
    );
    let _ = writeln!(
        output,
        "  {} {} / fit {}",
        format_colored_tier(tier, &heading),
        format_ds(song.ds(tier)),
        fit_diff
    );

    if !chart.badges.is_empty() {
        let _ = writeln!(output, "       {}", format_badges(&chart.badges));
    }
    if let Some(variant) = song.chart(tier) {
        let _ = writeln!(output, "       Charter: {}", variant.charter);
        let _ = writeln!(
            output,
            "       Notes:   {} ({})",
            variant.total_notes(),
            variant.notes_display()
        );
    }

    output
}

fn format_ds(ds: Option<f64>) -> String {
    ds.map(|ds| format!("{:.1}", ds))
        .unwrap_or_else(|| "-".to_string())
}

/// Build pager line: "< Page 2 / 5 >  (48 songs)"
fn format_pager(page: &CatalogPage<FilteredSong<'_>>) -> String {
    let prev = if page.has_prev() { "<" } else { " " };
    let next = if page.has_next() { ">" } else { " " };
    format!(
        "{} Page {} / {} {}  ({} songs)",
        prev, page.page, page.total_pages, next, page.total_items
    )
}

/// Format text with the tier's color
pub fn format_colored_tier(tier: Tier, text: &str) -> String {
    match tier {
        Tier::Basic => text.green().bold().to_string(),
        Tier::Advanced => text.yellow().bold().to_string(),
        Tier::Expert => text.red().bold().to_string(),
        Tier::Master => text.magenta().bold().to_string(),
        Tier::ReMaster => text.magenta().on_white().bold().to_string(),
    }
}

/// Format badge labels: "[小歌] [地雷]"
pub fn format_badges(badges: &BadgeSet) -> String {
    badges
        .iter()
        .map(format_colored_badge)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_colored_badge(badge: Badge) -> String {
    let label = format!("[{}]", badge.label());
    match badge {
        Badge::Xiaoge => label.red().to_string(),
        Badge::Xinge | Badge::Duijue => label.blue().to_string(),
        Badge::Zhenchaoxi => label.cyan().to_string(),
        Badge::Juezan => label.yellow().to_string(),
        Badge::Slides => label.bright_magenta().to_string(),
        Badge::Dilei => label.bold().to_string(),
        Badge::Baipu => label.dimmed().to_string(),
        Badge::Xingxing => label.bright_yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{classify_song, paginate};
    use crate::chart::{BasicInfo, ChartStatEntry, ChartVariant};
    use crate::query::FilterCriteria;

    fn make_song(id: &str, title: &str) -> SongRecord {
        SongRecord {
            id: id.to_string(),
            title: title.to_string(),
            chart_type: "SD".to_string(),
            ds: vec![4.0, 7.5, 10.8, 12.6, 13.9],
            old_ds: Vec::new(),
            level: ["4", "7+", "10+", "12+", "13+"].map(String::from).to_vec(),
            charts: (0..Tier::COUNT)
                .map(|_| ChartVariant {
                    charter: "ニャイン".to_string(),
                    notes: vec![300, 40, 120, 45],
                })
                .collect(),
            basic_info: BasicInfo {
                title: title.to_string(),
                artist: "Some Artist".to_string(),
                genre: "maimai".to_string(),
                bpm: 160.0,
                from: "maimai".to_string(),
                image_url: "x.png".to_string(),
                ..Default::default()
            },
            alias: None,
        }
    }

    #[test]
    fn test_collapsed_line() {
        let song = make_song("101", "Collapsed Song");
        let item = classify_song(&song, &ChartStatsIndex::new());
        let output = format_song_console(&item, &ChartStatsIndex::new(), "", false);
        assert!(output.contains("#101"));
        assert!(output.contains("Collapsed Song"));
        assert!(output.contains("MAS 12.6"));
        assert!(!output.contains("Charter"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_expanded_detail() {
        let song = make_song("102", "Expanded Song");
        let mut entries = vec![ChartStatEntry::default(); Tier::COUNT];
        entries[3].fit_diff = Some(13.01);
        let mut stats = ChartStatsIndex::new();
        stats.insert("102", entries);

        let item = classify_song(&song, &stats);
        let output = format_song_console(&item, &stats, "https://img/", true);
        assert!(output.contains("Cover: https://img/x.png"));
        assert!(output.contains("Version: maimai"));
        assert!(output.contains("fit 13.01"));
        assert!(output.contains("fit -"));
        assert!(output.contains("Charter: ニャイン"));
        assert!(output.contains("505 (300/40/120/45)"));
        assert!(output.contains("真超檄"));
        assert!(output.contains("白谱"));
    }

    #[test]
    fn test_page_with_pager() {
        let songs = [make_song("1", "First"), make_song("2", "Second")];
        let stats = ChartStatsIndex::new();
        let items = songs.iter().map(|s| classify_song(s, &stats)).collect();
        let page = paginate(items, 1, 1);
        let mut view = ViewState::new(FilterCriteria::new());
        view.expand("1");

        let output = format_page_console(&page, &view, &stats, "");
        assert!(output.contains("Charter"));
        assert!(!output.contains("Second"));
        assert!(output.contains("Page 1 / 2 >"));
        assert!(output.contains("(2 songs)"));
    }

    #[test]
    fn test_empty_page() {
        let page = paginate(Vec::<FilteredSong<'_>>::new(), 1, 10);
        let output = format_page_console(&page, &ViewState::default(), &ChartStatsIndex::new(), "");
        assert!(output.contains("No songs match."));
        assert!(output.contains("Page 1 / 1"));
    }
}
