//! Score aggregation and ranking
//!
//! Standings order:
//! 1. total, descending
//! 2. score on the last criterion, descending
//! 3. team name, ascending
//!
//! Ranks are 1-based positions in that order; there are no shared ranks.

use std::cmp::Ordering;

use serde::Serialize;

use crate::board::BoardState;

/// One ranked row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub team: String,
    /// Scores in criteria order
    pub scores: Vec<u8>,
    pub total: u32,
}

impl Standing {
    fn last_criterion(&self) -> u8 {
        self.scores.last().copied().unwrap_or(0)
    }
}

/// Average score of one criterion across all teams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionAverage {
    pub criterion: String,
    pub average: f64,
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| b.last_criterion().cmp(&a.last_criterion()))
        .then_with(|| a.team.cmp(&b.team))
}

/// Sum each team's scores and rank the teams.
pub fn compute_standings(state: &BoardState) -> Vec<Standing> {
    let mut rows: Vec<Standing> = state
        .teams
        .iter()
        .map(|team| {
            let scores = state.team_scores(team);
            let total = scores.iter().map(|s| u32::from(*s)).sum();
            Standing {
                rank: 0,
                team: team.clone(),
                scores,
                total,
            }
        })
        .collect();

    rows.sort_by(compare_standings);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Mean score per criterion over all teams, highest first.
///
/// Criteria with equal averages keep their board order. With no teams every
/// average is 0.0.
pub fn criterion_averages(state: &BoardState) -> Vec<CriterionAverage> {
    let team_count = state.teams.len();
    let mut averages: Vec<CriterionAverage> = state
        .criteria
        .iter()
        .map(|criterion| {
            let sum: u32 = state
                .teams
                .iter()
                .map(|team| u32::from(state.score(team, criterion)))
                .sum();
            let average = if team_count == 0 {
                0.0
            } else {
                f64::from(sum) / team_count as f64
            };
            CriterionAverage {
                criterion: criterion.clone(),
                average,
            }
        })
        .collect();

    // sort_by is stable, so ties keep criteria order
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));
    averages
}

/// The first `size` standings
pub fn podium(standings: &[Standing], size: usize) -> &[Standing] {
    &standings[..size.min(standings.len())]
}

/// Highest possible total for the board
pub fn max_total(state: &BoardState, max_score: u8) -> u32 {
    state.criteria.len() as u32 * u32::from(max_score)
}
