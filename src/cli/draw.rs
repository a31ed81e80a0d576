//! Draw subcommands for the presentation-order randomizer

use clap::Subcommand;

/// Draw subcommands
#[derive(Subcommand, Debug)]
pub enum DrawCommands {
    /// Publish a commitment to a secret (generated unless given)
    Commit {
        /// Hex secret to commit to
        #[arg(long)]
        secret: Option<String>,

        /// Replace a draw that was already revealed
        #[arg(long)]
        force: bool,
    },

    /// Reveal the secret and fix the presentation order
    Reveal {
        /// Hex secret matching the stored commitment
        #[arg(long)]
        secret: String,
    },

    /// Check a secret against a commitment and recompute the order
    Verify {
        /// Hex secret
        #[arg(long)]
        secret: String,

        /// Hex commitment (defaults to the stored one)
        #[arg(long)]
        commitment: Option<String>,
    },

    /// Show the current commitment and order
    Show,
}

impl DrawCommands {
    pub fn requires_pin(&self) -> bool {
        matches!(self, DrawCommands::Commit { .. } | DrawCommands::Reveal { .. })
    }
}
