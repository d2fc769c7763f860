use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::sync::Mutex;

/// Lifetime results for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub plays: u32,
    pub wins: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub last_win: Option<NaiveDate>,
    /// Mean guesses per win, one decimal.
    pub avg_guesses: Option<f64>,
}

impl PlayerStats {
    pub fn record_play(&mut self) {
        self.plays += 1;
    }

    /// Records a win on `day` that took `guesses` attempts.
    ///
    /// The streak grows when the previous win was the day before, holds on a
    /// second win the same day, and restarts at 1 otherwise.
    pub fn record_win(&mut self, day: NaiveDate, guesses: usize) {
        self.wins += 1;

        self.streak = match self.last_win {
            Some(last) if last == day => self.streak.max(1),
            Some(last) if day.pred_opt() == Some(last) => self.streak + 1,
            _ => 1,
        };
        self.best_streak = self.best_streak.max(self.streak);

        let g = guesses as f64;
        self.avg_guesses = Some(match self.avg_guesses {
            None => g,
            Some(prior) => {
                let wins = f64::from(self.wins);
                ((prior * (wins - 1.0) + g) / wins * 10.0).round() / 10.0
            }
        });

        self.last_win = Some(day);
    }

    pub fn daily_completed(&self, day: NaiveDate) -> bool {
        self.last_win == Some(day)
    }

    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.plays)
        }
    }
}

/// Persistence collaborator for player statistics. The game logic never
/// touches storage itself. Unknown players load as default stats.
pub trait StatsStore {
    type Error;

    fn load(&self, player: &str) -> impl Future<Output = Result<PlayerStats, Self::Error>> + Send;

    fn save(
        &self,
        player: &str,
        stats: &PlayerStats,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// In-process store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    players: Mutex<HashMap<String, PlayerStats>>,
}

impl StatsStore for MemoryStatsStore {
    type Error = Infallible;

    async fn load(&self, player: &str) -> Result<PlayerStats, Infallible> {
        let players = self.players.lock().unwrap_or_else(|e| e.into_inner());
        Ok(players.get(player).cloned().unwrap_or_default())
    }

    async fn save(&self, player: &str, stats: &PlayerStats) -> Result<(), Infallible> {
        let mut players = self.players.lock().unwrap_or_else(|e| e.into_inner());
        players.insert(player.to_string(), stats.clone());
        Ok(())
    }
}
