use colored::Colorize;
use std::fmt::Write as _;

use crate::api::models::{FormattedLineup, GenerateTeamsResponse};

/// Plain-text rendering of a response for the terminal.
pub fn render_summary(response: &GenerateTeamsResponse) -> String {
    let mut out = String::new();
    render_section(&mut out, "Top lineups", &response.top_teams);
    out.push('\n');
    render_section(&mut out, "Lowest lineups", &response.low_teams);
    out
}

fn render_section(out: &mut String, title: &str, lineups: &[FormattedLineup]) {
    let _ = writeln!(out, "{}", title.bold());
    if lineups.is_empty() {
        let _ = writeln!(out, "  {}", "no valid lineups".dimmed());
        return;
    }
    for (rank, lineup) in lineups.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{:<2} {:>8.2}  C: {}  VC: {}",
            rank + 1,
            lineup.score,
            lineup.captain.green(),
            lineup.vice_captain.cyan()
        );
        let _ = writeln!(out, "       {}", lineup.players.join(", "));
    }
}
