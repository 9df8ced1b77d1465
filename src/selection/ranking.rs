use std::cmp::Ordering;

use log::info;

use super::scorer::ScoreTable;
use super::types::{RankedPlayer, Ranking, ScoredLineup};
use crate::config::settings::RankingSettings;
use crate::domain::Lineup;

/// Ranks `lineups` by multiplier-weighted total and keeps both ends.
///
/// Ties are broken by input order at both levels: equal-scoring players keep
/// pool order when captain and vice-captain are picked, and equal-total
/// lineups keep enumeration order.
pub fn rank_lineups(lineups: &[Lineup], table: &ScoreTable, settings: &RankingSettings) -> Ranking {
    if lineups.is_empty() || settings.top_n == 0 {
        return Ranking {
            evaluated: lineups.len(),
            ..Ranking::default()
        };
    }

    let order = sort_by_total(lineups, table, settings);
    let top_n = settings.top_n.min(order.len());

    let top = order[..top_n]
        .iter()
        .map(|&(index, _)| evaluate_lineup(&lineups[index], table, settings))
        .collect();
    let bottom = order[order.len() - top_n..]
        .iter()
        .rev()
        .map(|&(index, _)| evaluate_lineup(&lineups[index], table, settings))
        .collect();

    info!("Ranked {} lineups", order.len());
    Ranking {
        top,
        bottom,
        evaluated: order.len(),
    }
}

/// Lineup indices paired with totals, highest total first.
fn sort_by_total(
    lineups: &[Lineup],
    table: &ScoreTable,
    settings: &RankingSettings,
) -> Vec<(usize, f64)> {
    let mut buffer = Vec::new();
    let mut totals: Vec<(usize, f64)> = lineups
        .iter()
        .enumerate()
        .map(|(index, lineup)| {
            rank_members_into(lineup, table, &mut buffer);
            (index, weighted_total(&buffer, settings))
        })
        .collect();

    // sort_by is stable, so equal totals keep enumeration order.
    totals.sort_by(|a, b| descending(a.1, b.1));
    totals
}

pub fn evaluate_lineup(lineup: &Lineup, table: &ScoreTable, settings: &RankingSettings) -> ScoredLineup {
    let mut ranked = Vec::with_capacity(lineup.len());
    rank_members_into(lineup, table, &mut ranked);
    let total = weighted_total(&ranked, settings);
    ScoredLineup {
        lineup: *lineup,
        ranked,
        total,
    }
}

fn rank_members_into(lineup: &Lineup, table: &ScoreTable, ranked: &mut Vec<RankedPlayer>) {
    ranked.clear();
    ranked.extend(lineup.positions().map(|position| RankedPlayer {
        position,
        score: table.get(position),
    }));
    ranked.sort_by(|a, b| descending(a.score, b.score));
}

/// Sum of scores with the captain and vice-captain multipliers applied to
/// the first two ranked players.
pub fn weighted_total(ranked: &[RankedPlayer], settings: &RankingSettings) -> f64 {
    ranked
        .iter()
        .enumerate()
        .map(|(rank, player)| player.score * multiplier_for(rank, settings))
        .sum()
}

fn multiplier_for(rank: usize, settings: &RankingSettings) -> f64 {
    match rank {
        0 => settings.captain_multiplier,
        1 => settings.vice_captain_multiplier,
        _ => 1.0,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
