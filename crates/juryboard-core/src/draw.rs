//! Commit-reveal draw for presentation order
//!
//! 1. Commit: publish `sha256(secret)` before the draw, together with the
//!    team list the draw will run over.
//! 2. Reveal: publish the secret. Anyone can check it against the
//!    commitment and recompute the order.
//!
//! The shuffle seed is `sha256(DOMAIN || secret || team_1 || 0 || team_2 || 0 ...)`
//! and drives a Fisher-Yates shuffle from `rand`'s `StdRng`, so the same
//! secret and team list always give the same order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::bail_invalid;
use crate::error::{JuryError, Result};

/// Domain separator mixed into every shuffle seed
const SEED_DOMAIN: &[u8] = b"juryboard-draw-v1\0";

/// Length of generated secrets in bytes
pub const SECRET_LEN: usize = 32;

/// A draw stored on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Hex SHA-256 of the secret
    pub commitment: String,
    pub committed_at: String,
    /// Teams the draw runs over, in board order at commit time
    pub teams: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<DrawReveal>,
}

/// The revealed half of a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReveal {
    /// Hex secret matching the commitment
    pub secret: String,
    pub order: Vec<String>,
    pub revealed_at: String,
}

impl DrawRecord {
    /// Commit to `secret_hex` for the given teams
    pub fn commit(secret_hex: &str, teams: &[String], now: String) -> Result<Self> {
        let secret = parse_secret(secret_hex)?;
        Ok(Self {
            commitment: commitment_for(&secret),
            committed_at: now,
            teams: teams.to_vec(),
            reveal: None,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_some()
    }

    /// Check the secret, compute the order and record it
    pub fn reveal(&mut self, secret_hex: &str, now: String) -> Result<&[String]> {
        let order = verify(secret_hex, &self.commitment, &self.teams)?;
        let reveal = self.reveal.insert(DrawReveal {
            secret: secret_hex.trim().to_lowercase(),
            order,
            revealed_at: now,
        });
        Ok(&reveal.order)
    }
}

/// Generate a fresh random secret, hex encoded
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Decode a hex secret; it must be non-empty
pub fn parse_secret(secret_hex: &str) -> Result<Vec<u8>> {
    let trimmed = secret_hex.trim();
    if trimmed.is_empty() {
        bail_invalid!("draw secret", "empty");
    }
    hex::decode(trimmed).map_err(|e| JuryError::invalid_value("draw secret", e))
}

/// Hex SHA-256 commitment of a secret
pub fn commitment_for(secret: &[u8]) -> String {
    hex::encode(Sha256::digest(secret))
}

/// Shuffle seed for a secret and team list
pub fn seed_for(secret: &[u8], teams: &[String]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update(secret);
    for team in teams {
        hasher.update(team.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    seed
}

/// Presentation order for a secret and team list
pub fn draw_order(secret: &[u8], teams: &[String]) -> Vec<String> {
    let mut rng = StdRng::from_seed(seed_for(secret, teams));
    let mut order = teams.to_vec();
    order.shuffle(&mut rng);
    order
}

/// Check `secret_hex` against `commitment` and recompute the order.
pub fn verify(secret_hex: &str, commitment: &str, teams: &[String]) -> Result<Vec<String>> {
    let secret = parse_secret(secret_hex)?;
    if !commitment_for(&secret).eq_ignore_ascii_case(commitment.trim()) {
        tracing::warn!(commitment, "draw secret does not match commitment");
        return Err(JuryError::CommitmentMismatch);
    }
    Ok(draw_order(&secret, teams))
}
