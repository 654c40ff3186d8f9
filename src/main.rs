use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_tracker::calculate::{calculate_leaderboard, group_standings};
use league_tracker::config::{AppConfig, ServerConfig};
use league_tracker::models::PredictionResult;
use league_tracker::repo::{JsonlRepository, LeagueRepository};
use league_tracker::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "league-tracker")]
#[command(about = "Two-group football league tracker with a match prediction game")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,

    /// Data directory path
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (defaults to the configured server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port number (defaults to the configured server.port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the grouped league tables
    Standings,

    /// Print the match schedule
    Schedule,

    /// Print the prediction leaderboard
    Leaderboard,

    /// Record a final score and mark the match completed
    RecordResult {
        match_id: i64,
        team_a_score: u32,
        team_b_score: u32,
    },

    /// Reschedule a match (YYYY-MM-DD)
    SetDate { match_id: i64, date: String },

    /// Rename a team
    RenameTeam { team_id: i64, name: String },

    /// Submit or replace a prediction (teamA, teamB or draw)
    Predict {
        match_id: i64,
        user_id: String,
        prediction: String,
    },
}

/// Bind address resolution: explicit flags win over the config file.
fn resolve_addr(host: Option<String>, port: Option<u16>, server: &ServerConfig) -> (String, u16) {
    (
        host.unwrap_or_else(|| server.host.clone()),
        port.unwrap_or(server.port),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting league-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(&std::path::PathBuf::from(path))?,
        None => AppConfig {
            data_dir: std::path::PathBuf::from(&cli.data_dir),
            ..AppConfig::default()
        },
    };

    let storage = StorageConfig::new(config.data_dir.clone());
    let repo = Arc::new(JsonlRepository::new(storage));

    match cli.command {
        Commands::Serve { host, port } => {
            let (host, port) = resolve_addr(host, port, &config.server);
            let state = league_tracker::api::state::AppState { repo };
            let app = league_tracker::api::build_router_with_cors(
                state,
                &config.server.cors_origin,
            );
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Standings => {
            let teams = repo.list_teams().await?;
            let matches = repo.list_matches().await?;
            let names: std::collections::HashMap<i64, &str> =
                teams.iter().map(|t| (t.id, t.name.as_str())).collect();

            for group in group_standings(&teams, &matches) {
                println!("=== Group {} ===", group.group_name);
                println!(
                    "{:<4}{:<22}{:>3}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}{:>5}",
                    "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
                );
                for (pos, row) in group.table.iter().enumerate() {
                    println!(
                        "{:<4}{:<22}{:>3}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}{:>5}",
                        pos + 1,
                        names.get(&row.team_id).unwrap_or(&"?"),
                        row.played,
                        row.won,
                        row.drawn,
                        row.lost,
                        row.goals_for,
                        row.goals_against,
                        row.goal_difference,
                        row.points,
                    );
                }
                println!();
            }
        }
        Commands::Schedule => {
            let teams = repo.list_teams().await?;
            let matches = repo.list_matches().await?;
            let names: std::collections::HashMap<i64, &str> =
                teams.iter().map(|t| (t.id, t.name.as_str())).collect();

            for m in &matches {
                let date = m
                    .match_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "TBD".to_string());
                let score = match (m.team_a_score, m.team_b_score) {
                    (Some(a), Some(b)) => format!("{}-{}", a, b),
                    _ => "vs".to_string(),
                };
                println!(
                    "#{:<4} {:<12} {:>20} {} {:<20}",
                    m.id,
                    date,
                    names.get(&m.team_a_id).unwrap_or(&"?"),
                    score,
                    names.get(&m.team_b_id).unwrap_or(&"?"),
                );
            }
        }
        Commands::Leaderboard => {
            let profiles = repo.list_profiles().await?;
            let matches = repo.list_matches().await?;
            let predictions = repo.list_predictions().await?;

            println!(
                "{:<4}{:<20}{:>6}{:>7}{:>9}{:>7}{:>9}",
                "#", "User", "Score", "Total", "Correct", "Wrong", "Pending"
            );
            for (pos, entry) in calculate_leaderboard(&profiles, &matches, &predictions)
                .iter()
                .enumerate()
            {
                println!(
                    "{:<4}{:<20}{:>6}{:>7}{:>9}{:>7}{:>9}",
                    pos + 1,
                    entry.username,
                    entry.score,
                    entry.total_predictions,
                    entry.correct_predictions,
                    entry.wrong_predictions,
                    entry.pending_predictions,
                );
            }
        }
        Commands::RecordResult {
            match_id,
            team_a_score,
            team_b_score,
        } => {
            let updated = repo
                .save_match_result(match_id, team_a_score, team_b_score)
                .await?;
            println!(
                "Match {} completed: {}-{}",
                updated.id, team_a_score, team_b_score
            );
        }
        Commands::SetDate { match_id, date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("invalid date '{}' (expected YYYY-MM-DD)", date))?;
            let updated = repo.update_match_date(match_id, date).await?;
            println!("Match {} scheduled for {}", updated.id, date);
        }
        Commands::RenameTeam { team_id, name } => {
            let updated = repo.update_team_name(team_id, name).await?;
            println!("Team {} renamed to '{}'", updated.id, updated.name);
        }
        Commands::Predict {
            match_id,
            user_id,
            prediction,
        } => {
            let pick: PredictionResult = prediction
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let stored = repo.upsert_prediction(match_id, user_id, pick).await?;
            println!(
                "Prediction stored: match {} -> {}",
                stored.match_id, stored.prediction
            );
        }
    }

    Ok(())
}
