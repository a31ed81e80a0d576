//! Board state: teams, criteria and the score grid
//!
//! The whole board lives in one JSON document (`scores.json`). Scores are
//! keyed by team name, then criterion name; a missing cell reads as 0.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::{BoardConfig, DEFAULT_CRITERIA_COUNT, DEFAULT_TEAM_COUNT};
use crate::draw::DrawRecord;
use crate::error::{JuryError, Result};
use crate::{bail_invalid, bail_not_found};

/// Score grid: team -> criterion -> score
pub type ScoreGrid = BTreeMap<String, BTreeMap<String, u8>>;

/// The persisted board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Teams in entry order
    pub teams: Vec<String>,

    /// Criteria in display order; the last one breaks ties
    pub criteria: Vec<String>,

    #[serde(default)]
    pub scores: ScoreGrid,

    /// Local time of the last save, `%Y-%m-%d %H:%M:%S`
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Commit-reveal draw for presentation order, if one was started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw: Option<DrawRecord>,
}

impl Default for BoardState {
    fn default() -> Self {
        let teams = (1..=DEFAULT_TEAM_COUNT)
            .map(|i| format!("Team {}", i))
            .collect();
        let criteria = (1..=DEFAULT_CRITERIA_COUNT)
            .map(|i| format!("Criterion {}", i))
            .collect();
        Self::new(teams, criteria)
    }
}

impl BoardState {
    /// Create a board with an all-zero grid
    pub fn new(teams: Vec<String>, criteria: Vec<String>) -> Self {
        let scores = zero_grid(&teams, &criteria);
        Self {
            teams,
            criteria,
            scores,
            updated_at: None,
            draw: None,
        }
    }

    /// Check names and fill every missing cell with 0.
    ///
    /// Cells for teams or criteria that are no longer on the board are dropped.
    pub fn normalize(&mut self) -> Result<()> {
        check_names("team", &self.teams)?;
        check_names("criterion", &self.criteria)?;

        let mut grid = zero_grid(&self.teams, &self.criteria);
        for (team, row) in grid.iter_mut() {
            if let Some(old_row) = self.scores.get(team) {
                for (criterion, cell) in row.iter_mut() {
                    if let Some(value) = old_row.get(criterion) {
                        *cell = *value;
                    }
                }
            }
        }
        self.scores = grid;
        Ok(())
    }

    /// Score for one cell; missing cells read as 0
    pub fn score(&self, team: &str, criterion: &str) -> u8 {
        self.scores
            .get(team)
            .and_then(|row| row.get(criterion))
            .copied()
            .unwrap_or(0)
    }

    /// A team's scores in criteria order
    pub fn team_scores(&self, team: &str) -> Vec<u8> {
        self.criteria
            .iter()
            .map(|c| self.score(team, c))
            .collect()
    }

    pub fn has_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    pub fn has_criterion(&self, criterion: &str) -> bool {
        self.criteria.iter().any(|c| c == criterion)
    }

    /// Set one score, rejecting unknown names and out-of-range values
    pub fn set_score(&mut self, team: &str, criterion: &str, value: u32, max: u8) -> Result<()> {
        if !self.has_team(team) {
            bail_not_found!("team", team);
        }
        if !self.has_criterion(criterion) {
            bail_not_found!("criterion", criterion);
        }
        let value = check_range(team, criterion, value, max)?;

        self.scores
            .entry(team.to_string())
            .or_default()
            .insert(criterion.to_string(), value);
        Ok(())
    }

    /// Set a whole team row at once, in criteria order.
    ///
    /// Either every value is applied or none is.
    pub fn set_row(&mut self, team: &str, values: &[u32], max: u8) -> Result<()> {
        if !self.has_team(team) {
            bail_not_found!("team", team);
        }
        if values.len() != self.criteria.len() {
            return Err(JuryError::WrongCount {
                what: "scores".to_string(),
                expected: self.criteria.len(),
                actual: values.len(),
            });
        }

        let checked = self
            .criteria
            .iter()
            .zip(values)
            .map(|(criterion, value)| {
                check_range(team, criterion, *value, max).map(|v| (criterion.clone(), v))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        self.scores.insert(team.to_string(), checked);
        Ok(())
    }

    /// Replace team and criterion names.
    ///
    /// Scores survive for every (team, criterion) pair whose names are kept
    /// exactly; all other cells start at 0.
    pub fn rename(
        &mut self,
        teams: Vec<String>,
        criteria: Vec<String>,
        config: &BoardConfig,
    ) -> Result<()> {
        let teams = clean_names(teams);
        let criteria = clean_names(criteria);

        check_count("teams", config.team_count, teams.len())?;
        check_count("criteria", config.criteria_count, criteria.len())?;
        check_names("team", &teams)?;
        check_names("criterion", &criteria)?;

        let mut grid = zero_grid(&teams, &criteria);
        for (team, row) in grid.iter_mut() {
            for (criterion, cell) in row.iter_mut() {
                *cell = self.score(team, criterion);
            }
        }

        tracing::debug!(
            teams = teams.len(),
            criteria = criteria.len(),
            "rename_board"
        );

        self.teams = teams;
        self.criteria = criteria;
        self.scores = grid;
        Ok(())
    }

    /// Number of cells scored above `max`
    pub fn cells_above(&self, max: u8) -> usize {
        self.scores
            .values()
            .flat_map(|row| row.values())
            .filter(|v| **v > max)
            .count()
    }

    /// Number of cells with a non-zero score
    pub fn scored_cells(&self) -> usize {
        self.scores
            .values()
            .flat_map(|row| row.values())
            .filter(|v| **v > 0)
            .count()
    }
}

/// Split a one-name-per-line block into trimmed, non-blank names
pub fn parse_names(text: &str) -> Vec<String> {
    clean_names(text.lines().map(str::to_string).collect())
}

fn clean_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

fn zero_grid(teams: &[String], criteria: &[String]) -> ScoreGrid {
    teams
        .iter()
        .map(|t| (t.clone(), criteria.iter().map(|c| (c.clone(), 0)).collect()))
        .collect()
}

fn check_range(team: &str, criterion: &str, value: u32, max: u8) -> Result<u8> {
    if value > u32::from(max) {
        return Err(JuryError::ScoreOutOfRange {
            team: team.to_string(),
            criterion: criterion.to_string(),
            value,
            max,
        });
    }
    Ok(value as u8)
}

fn check_count(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != 0 && expected != actual {
        return Err(JuryError::WrongCount {
            what: what.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_names(context: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            bail_invalid!(context, "empty name");
        }
        if name.chars().any(char::is_control) {
            bail_invalid!(context, format!("{:?} contains a control character", name));
        }
        if !seen.insert(name.as_str()) {
            return Err(JuryError::already_exists(context, name));
        }
    }
    Ok(())
}
