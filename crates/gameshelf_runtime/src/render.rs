//! Plain-text rendering of game listings.

use std::fmt::Write as _;

use gameshelf_foundation::GameRecord;

const TABLE_NAME_LIMIT: usize = 50;
const GROUPED_NAME_LIMIT: usize = 40;
const RULE: &str = "--------------------------------------------------";

/// Truncates `name` to `width` characters, marking the cut with `...`.
#[must_use]
pub fn fit_name(name: &str, width: usize) -> String {
    if width > 3 && name.chars().count() > width - 3 {
        let kept: String = name.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

fn name_width(games: &[&GameRecord], padding: usize, limit: usize) -> usize {
    let longest = games
        .iter()
        .map(|game| game.name.chars().count())
        .max()
        .unwrap_or(0);
    (longest + padding).min(limit)
}

/// Renders an `AppID / Name / Playtime (H:M)` table under `title`.
#[must_use]
pub fn game_table(title: &str, games: &[&GameRecord]) -> String {
    let width = name_width(games, 2, TABLE_NAME_LIMIT).max("Name".len());
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{:<10} {:<width$} {:<15}", "AppID", "Name", "Playtime (H:M)");
    let _ = writeln!(out, "{:-<10} {:-<width$} {:-<15}", "", "", "");
    for game in games {
        let (hours, minutes) = game.playtime_hours_minutes();
        let _ = writeln!(
            out,
            "{:<10} {:<width$} {hours:>5}:{minutes:0>2}",
            game.app_id,
            fit_name(&game.name, width)
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = write!(out, "Displayed {} games.", games.len());
    out
}

/// Renders a bulleted name list with a total.
#[must_use]
pub fn name_list(title: &str, games: &[&GameRecord]) -> String {
    let width = name_width(games, 2, TABLE_NAME_LIMIT);
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    for game in games {
        let _ = writeln!(out, "- {}", fit_name(&game.name, width));
    }
    let _ = write!(out, "\nTotal games: {}", games.len());
    out
}

/// Renders games grouped under their initials.
#[must_use]
pub fn grouped_list(groups: &[(char, Vec<&GameRecord>)]) -> String {
    let all: Vec<&GameRecord> = groups
        .iter()
        .flat_map(|(_, games)| games.iter().copied())
        .collect();
    let width = name_width(&all, 4, GROUPED_NAME_LIMIT);
    let mut out = String::from("Games by Initial Letter:\n");

    for (i, (initial, games)) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "-- {initial} --");
        for game in games {
            let _ = writeln!(out, "{:<width$} {:<10}", fit_name(&game.name, width), game.app_id);
        }
    }
    out.truncate(out.trim_end().len());
    out
}
