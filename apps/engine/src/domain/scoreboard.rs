//! Standings aggregator for externally computed round scores.
//!
//! The scoreboard never computes scores from bids and outcomes; it only
//! accumulates per-round values handed to it and renders plain-text
//! standings. It shares the canonical [`Phase`] with the progression machine.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::state::Phase;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// One player's cumulative score information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub total_score: i32,
    /// round_number -> score for that round
    pub round_scores: BTreeMap<u8, i32>,
    /// 1-based rank; 0 until standings are computed.
    pub rank: u32,
}

impl PlayerScore {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_score: 0,
            round_scores: BTreeMap::new(),
            rank: 0,
        }
    }
}

/// Running totals and standings for all players.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    players: BTreeMap<String, PlayerScore>,
    current_round: u8,
    total_rounds: u8,
    current_phase: Phase,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
            current_round: 0,
            total_rounds: 0,
            current_phase: Phase::Setup,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), DomainError> {
        if self.players.contains_key(name) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerExists,
                format!("Player '{name}' already exists"),
            ));
        }
        self.players.insert(name.to_string(), PlayerScore::new(name));
        Ok(())
    }

    /// Record a player's score for a round, overwriting any earlier entry
    /// for the same round and recomputing the cumulative total.
    pub fn record_round_score(
        &mut self,
        name: &str,
        round_no: u8,
        score: i32,
    ) -> Result<(), DomainError> {
        let player = self.players.get_mut(name).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player '{name}' not found"))
        })?;

        player.round_scores.insert(round_no, score);
        player.total_score = player.round_scores.values().sum();
        debug!(
            player = name,
            round = round_no,
            score,
            total = player.total_score,
            "Round score recorded"
        );
        Ok(())
    }

    /// Update the round counter shown in display headers.
    pub fn set_round(&mut self, round_no: u8, total_rounds: u8) {
        self.current_round = round_no;
        self.total_rounds = total_rounds;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.current_phase = phase;
    }

    /// Players sorted by descending total (ties broken by name, ascending),
    /// with 1-based ranks assigned.
    pub fn standings(&self) -> Vec<PlayerScore> {
        let mut standings: Vec<PlayerScore> = self.players.values().cloned().collect();
        standings.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.name.cmp(&b.name))
        });
        for (idx, player) in standings.iter_mut().enumerate() {
            player.rank = idx as u32 + 1;
        }
        standings
    }

    pub fn display_standings(&self) -> String {
        if self.players.is_empty() {
            return "No players in the game.".to_string();
        }

        let phase = self.current_phase;
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out, "CURRENT STANDINGS");
        let _ = writeln!(
            out,
            "Round {}/{} | Phase: {phase}",
            self.current_round, self.total_rounds
        );
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out, "{:<6}{:<25}{:<10}", "Rank", "Player", "Score");
        let _ = writeln!(out, "{}", "-".repeat(50));
        for player in self.standings() {
            let _ = writeln!(
                out,
                "{:<6}{:<25}{:<10}",
                player.rank, player.name, player.total_score
            );
        }
        let _ = write!(out, "{}", "=".repeat(50));
        out
    }

    /// Round-by-round breakdown, either for a single player or (in standings
    /// order) for everyone.
    pub fn display_round_breakdown(&self, name: Option<&str>) -> Result<String, DomainError> {
        if self.players.is_empty() {
            return Ok("No players in the game.".to_string());
        }

        let players = match name {
            Some(n) => {
                let player = self.players.get(n).ok_or_else(|| {
                    DomainError::not_found(NotFoundKind::Player, format!("Player '{n}' not found"))
                })?;
                vec![player.clone()]
            }
            None => self.standings(),
        };

        let mut all_rounds: Vec<u8> = self
            .players
            .values()
            .flat_map(|p| p.round_scores.keys().copied())
            .collect();
        all_rounds.sort_unstable();
        all_rounds.dedup();

        if all_rounds.is_empty() {
            return Ok("No rounds played yet.".to_string());
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(out, "ROUND-BY-ROUND BREAKDOWN");
        let _ = writeln!(out, "{}", "=".repeat(70));

        for player in &players {
            let _ = writeln!(out);
            let _ = writeln!(out, "{} (Total: {})", player.name, player.total_score);
            let _ = writeln!(out, "{}", "-".repeat(70));
            let _ = writeln!(out, "{:<10}{:<10}{:<15}", "Round", "Score", "Running Total");
            let _ = writeln!(out, "{}", "-".repeat(70));

            let mut running_total = 0;
            for round_no in &all_rounds {
                let score = player.round_scores.get(round_no).copied().unwrap_or(0);
                running_total += score;
                let _ = writeln!(out, "{round_no:<10}{score:<10}{running_total:<15}");
            }
        }

        let _ = write!(out, "{}", "=".repeat(70));
        Ok(out)
    }

    /// Standings plus the full round breakdown in one report.
    pub fn display_game_status(&self) -> String {
        let breakdown = self
            .display_round_breakdown(None)
            .unwrap_or_else(|e| e.to_string());
        format!("\n{}\n\n{breakdown}", self.display_standings())
    }
}
