//! Badges command: list badge keys, labels and rules.

use anyhow::Result;
use maidx_core::Badge;
use strum::IntoEnumIterator;

pub fn run() -> Result<()> {
    for badge in Badge::iter() {
        println!(
            "{:<12} {:<4} {}",
            badge.key(),
            badge.label(),
            badge.description()
        );
    }
    Ok(())
}
