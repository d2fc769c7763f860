use atlasly::game::{PlayerStats, StatsStore};
use chrono::NaiveDate;
use sqlx::SqlitePool;

const DATE_FORMAT: &str = "%Y-%m-%d";

type StatsRow = (u32, u32, u32, u32, Option<String>, Option<f64>);

/// SQLite-backed player statistics.
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StatsStore for StatsRepository {
    type Error = sqlx::Error;

    async fn load(&self, player: &str) -> Result<PlayerStats, sqlx::Error> {
        let row: Option<StatsRow> = sqlx::query_as(
            "SELECT plays, wins, streak, best_streak, last_win, avg_guesses
             FROM player_stats WHERE player = $1",
        )
        .bind(player)
        .fetch_optional(&self.pool)
        .await?;

        let Some((plays, wins, streak, best_streak, last_win, avg_guesses)) = row else {
            return Ok(PlayerStats::default());
        };

        Ok(PlayerStats {
            plays,
            wins,
            streak,
            best_streak,
            last_win: last_win.and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()),
            avg_guesses,
        })
    }

    async fn save(&self, player: &str, stats: &PlayerStats) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO player_stats (player, plays, wins, streak, best_streak, last_win, avg_guesses)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT(player) DO UPDATE SET
                plays = excluded.plays,
                wins = excluded.wins,
                streak = excluded.streak,
                best_streak = excluded.best_streak,
                last_win = excluded.last_win,
                avg_guesses = excluded.avg_guesses,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(player)
        .bind(stats.plays)
        .bind(stats.wins)
        .bind(stats.streak)
        .bind(stats.best_streak)
        .bind(stats.last_win.map(|d| d.format(DATE_FORMAT).to_string()))
        .bind(stats.avg_guesses)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> StatsRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        StatsRepository::new(pool)
    }

    #[tokio::test]
    async fn test_unknown_player_loads_defaults() {
        let repo = repository().await;
        assert_eq!(repo.load("nobody").await.unwrap(), PlayerStats::default());
    }

    #[tokio::test]
    async fn test_saved_stats_round_trip() {
        let repo = repository().await;
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let mut stats = PlayerStats::default();
        stats.record_play();
        stats.record_win(day, 3);
        repo.save("alice", &stats).await.unwrap();

        let loaded = repo.load("alice").await.unwrap();
        assert_eq!(loaded, stats);
        assert_eq!(loaded.last_win, Some(day));
        assert_eq!(loaded.avg_guesses, Some(3.0));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_row() {
        let repo = repository().await;
        let mut stats = PlayerStats::default();
        stats.record_play();
        repo.save("alice", &stats).await.unwrap();
        stats.record_play();
        repo.save("alice", &stats).await.unwrap();

        assert_eq!(repo.load("alice").await.unwrap().plays, 2);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM player_stats")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_players_are_independent() {
        let repo = repository().await;
        let mut stats = PlayerStats::default();
        stats.record_play();
        repo.save("alice", &stats).await.unwrap();

        assert_eq!(repo.load("bob").await.unwrap().plays, 0);
    }
}
