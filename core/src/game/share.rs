use super::messages::{GameStatus, Guess};

/// Eight-way arrow for a compass bearing.
pub fn compass_arrow(bearing: f64) -> &'static str {
    match bearing {
        b if !(22.5..337.5).contains(&b) => "↑",
        b if b < 67.5 => "↗",
        b if b < 112.5 => "→",
        b if b < 157.5 => "↘",
        b if b < 202.5 => "↓",
        b if b < 247.5 => "↙",
        b if b < 292.5 => "←",
        _ => "↖",
    }
}

pub fn heat_square(proximity_percent: u8) -> &'static str {
    match proximity_percent {
        80.. => "🟩",
        50.. => "🟨",
        _ => "🟦",
    }
}

/// Spoiler-free summary of a finished round.
pub fn share_text(seed: i64, status: GameStatus, guesses: &[Guess]) -> String {
    let mut lines = vec![format!("Atlasly 🌍  #{seed}")];
    lines.push(match status {
        GameStatus::Won => format!("Solved in {}", guesses.len()),
        _ => "Not solved".to_string(),
    });
    lines.push(String::new());
    lines.extend(guesses.iter().map(|g| {
        format!(
            "{} {} {}km",
            heat_square(g.proximity_percent),
            compass_arrow(g.bearing_degrees),
            g.distance_km
        )
    }));
    lines.join("\n")
}
