//! Terminal rendering shared by the commands.

use colored::Colorize;
use isla_application::IslandDetail;
use isla_core::island::Island;
use isla_core::species::{AnimationHint, DEFAULT_PALETTE};

pub fn island_line(island: &Island) -> String {
    format!(
        "{:>2}. {} {} {}",
        island.order_index,
        island.id.bright_cyan(),
        island.name.bold(),
        format!("({})", island.coordinates_label()).dimmed()
    )
}

/// Parses `#rrggbb` into its channels.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// RGB gradient stops for a creature badge.
fn badge_stops(hint: &AnimationHint) -> [(u8, u8, u8); 2] {
    let (start, end) = hint.gradient();
    let stop = |hex: &str, fallback: &str| {
        hex_rgb(hex)
            .or_else(|| hex_rgb(fallback))
            .unwrap_or((255, 255, 255))
    };
    [
        stop(&start, DEFAULT_PALETTE[0]),
        stop(&end, DEFAULT_PALETTE[1]),
    ]
}

/// Two half blocks painted with the creature's gradient stops.
fn badge(hint: &AnimationHint) -> String {
    let [(r1, g1, b1), (r2, g2, b2)] = badge_stops(hint);
    format!("{}{}", "▐".truecolor(r1, g1, b1), "▌".truecolor(r2, g2, b2))
}

pub fn print_detail(detail: &IslandDetail) {
    let island = &detail.island;
    println!("{}", island.name.bright_magenta().bold());
    println!("{}", island.coordinates_label().dimmed());

    for (field, text) in detail.overview_sections() {
        println!();
        println!("{}", field.to_string().bright_yellow());
        println!("{}", text);
    }

    println!();
    if detail.species_loading {
        println!("{}", "Loading species...".dimmed());
        return;
    }
    println!(
        "{}",
        format!("Extinct species ({})", detail.species_count()).bright_yellow()
    );
    if let Some(featured) = detail.featured_species() {
        println!("  {} {}", "Featured:".dimmed(), featured.name.bright_white());
    }
    for species in &detail.species {
        let year = species
            .extinction_year
            .map(|year| format!(" - extinct {year}"))
            .unwrap_or_default();
        let scientific = species
            .scientific_name
            .as_deref()
            .map(|name| format!(" ({})", name.italic()))
            .unwrap_or_default();
        println!(
            "  {}{} {}{}{}",
            badge(&species.animation),
            species.category.glyph(),
            species.name.bold(),
            scientific,
            year.dimmed()
        );
        if let Some(cause) = &species.extinction_cause {
            println!("     {}", cause.dimmed());
        }
        if let Some(url) = &species.wikipedia_url {
            println!("     {}", url.blue());
        }
    }
    if let Some(url) = &island.background_video_url {
        println!();
        println!("{} {}", "Video:".dimmed(), url.blue());
    }
}
