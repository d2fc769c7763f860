mod config;
mod round;
mod stats_repository;

use atlasly::game::{
    GameSession, GameStatus, PlayerStats, StatsStore, daily_seed, multiple_choice, pick_daily, pick_random,
    share_text,
};
use atlasly::{Catalog, load_catalog};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use config::Config;
use sqlx::SqlitePool;
use stats_repository::StatsRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "play", about = "Find the mystery country from distance and direction hints")]
struct Args {
    /// Shape dataset (TopoJSON or GeoJSON)
    #[arg(long, env = "ATLASLY_SHAPES")]
    shapes: Option<PathBuf>,

    /// Facts dataset (REST Countries v3.1 JSON)
    #[arg(long, env = "ATLASLY_FACTS")]
    facts: Option<PathBuf>,

    /// SQLite database URL for player statistics
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Player name statistics are kept under
    #[arg(long, env = "ATLASLY_PLAYER")]
    player: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the daily puzzle
    Daily {
        /// Puzzle date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Offer four options to choose from
        #[arg(long)]
        easy: bool,
    },
    /// Play a random country
    Random {
        /// Offer four options to choose from
        #[arg(long)]
        easy: bool,
    },
    /// Show which country a piece of text resolves to
    Resolve { text: String },
    /// List playable countries with their difficulty
    Catalog,
    /// Show player statistics
    Stats,
}

async fn load(shapes: &Path, facts: &Path) -> Result<Arc<Catalog>, Box<dyn std::error::Error>> {
    let shapes_json = tokio::fs::read_to_string(shapes).await?;
    let facts_json = tokio::fs::read_to_string(facts).await?;

    let (catalog, report) = load_catalog(&shapes_json, &facts_json)?;
    tracing::info!(
        entries = catalog.len(),
        facts = catalog.facts().len(),
        unmatched = report.unmatched,
        "Catalog loaded"
    );

    if catalog.is_empty() {
        return Err(format!("no playable countries in {}", shapes.display()).into());
    }
    Ok(Arc::new(catalog))
}

fn print_stats(player: &str, stats: &PlayerStats) {
    println!("Player:       {player}");
    println!("Played:       {}", stats.plays);
    println!("Won:          {} ({:.0}%)", stats.wins, stats.win_rate() * 100.0);
    println!("Streak:       {} (best {})", stats.streak, stats.best_streak);
    match stats.avg_guesses {
        Some(avg) => println!("Avg guesses:  {avg:.1}"),
        None => println!("Avg guesses:  —"),
    }
    match stats.last_win {
        Some(day) => println!("Last win:     {day}"),
        None => println!("Last win:     —"),
    }
}

/// Day a daily round counts towards in the stats. Replays of other days are
/// practice and leave the stats alone.
fn daily_stats_day(puzzle: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    (puzzle == today).then_some(today)
}

/// One round against `target`, with the bonus round after a win. Stats are
/// recorded under `stats_day` when it is set.
async fn play(
    catalog: Arc<Catalog>,
    target: &str,
    seed: Option<i64>,
    easy: bool,
    stats_day: Option<NaiveDate>,
    repo: &StatsRepository,
    player: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    let mut stats = repo.load(player).await?;
    if stats_day.is_some() {
        stats.record_play();
        repo.save(player, &stats).await?;
    }

    let mut session = GameSession::new(catalog.clone(), target)?;
    let options = easy.then(|| multiple_choice(&catalog, target, &mut rng));

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let status = round::play_round(&mut session, &mut input, options.as_deref()).await?;

    if let Some(day) = stats_day.filter(|_| status == GameStatus::Won) {
        stats.record_win(day, session.guesses().len());
        repo.save(player, &stats).await?;
        tracing::info!(player, %day, streak = stats.streak, "Win recorded");
    }

    if let Some(seed) = seed.filter(|_| status.is_over()) {
        println!();
        println!("{}", share_text(seed, status, session.guesses()));
    }

    if status == GameStatus::Won {
        if let Some(entry) = session.target_entry() {
            println!();
            round::play_bonus(&catalog, entry, &mut input, &mut rng).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let args = Args::parse();

    let shapes = args.shapes.unwrap_or(config.shapes);
    let facts = args.facts.unwrap_or(config.facts);
    let database_url = args.database_url.unwrap_or(config.database_url);
    let player = args.player.unwrap_or(config.player);
    let command = args.command.unwrap_or(Command::Daily {
        date: None,
        easy: false,
    });

    match command {
        Command::Resolve { text } => {
            let catalog = load(&shapes, &facts).await?;
            match catalog.resolve_guess(&text) {
                Some(name) => println!("{name}"),
                None => println!("Not recognized: {text:?}"),
            }
        }
        Command::Catalog => {
            let catalog = load(&shapes, &facts).await?;
            for name in catalog.names_sorted() {
                if let Some(entry) = catalog.entry(name) {
                    let linked = if entry.facts.is_some() { "" } else { "  (no facts)" };
                    println!("{}  {name}{linked}", entry.difficulty);
                }
            }
            println!("{} countries", catalog.len());
        }
        Command::Stats => {
            let pool = SqlitePool::connect(&database_url).await?;
            sqlx::migrate!().run(&pool).await?;
            let stats = StatsRepository::new(pool).load(&player).await?;
            print_stats(&player, &stats);
        }
        Command::Daily { date, easy } => {
            let today = Local::now().date_naive();
            let date = date.unwrap_or(today);

            let pool = SqlitePool::connect(&database_url).await?;
            sqlx::migrate!().run(&pool).await?;
            let repo = StatsRepository::new(pool);

            if date == today && repo.load(&player).await?.daily_completed(today) {
                println!("Today's puzzle is already solved. Come back tomorrow, or try `play random`.");
                return Ok(());
            }

            let catalog = load(&shapes, &facts).await?;
            let target = pick_daily(&catalog, date).ok_or("empty catalog")?.to_string();
            if date != today {
                println!("Replaying {date}; this round does not count towards your stats.");
            }
            let stats_day = daily_stats_day(date, today);
            play(catalog, &target, Some(daily_seed(date)), easy, stats_day, &repo, &player).await?;
        }
        Command::Random { easy } => {
            let pool = SqlitePool::connect(&database_url).await?;
            sqlx::migrate!().run(&pool).await?;
            let repo = StatsRepository::new(pool);

            let catalog = load(&shapes, &facts).await?;
            let target = pick_random(&catalog, &mut rand::rng())
                .ok_or("empty catalog")?
                .to_string();
            let today = Local::now().date_naive();
            play(catalog, &target, None, easy, Some(today), &repo, &player).await?;
        }
    }

    Ok(())
}
