use std::path::PathBuf;

use clap::Parser;
use quoridor::MatchConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use referee::{play_match, ClientConfig, MatchResult, Recorder, SeatClient};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON file of the first seat client
    seat_config_1: PathBuf,

    /// Path to the config JSON file of the second seat client
    seat_config_2: PathBuf,

    /// How many matches to play
    #[arg(short, long, default_value_t = 1)]
    num_matches: usize,

    /// Tiles along one edge of the board
    #[arg(long, default_value_t = 9)]
    board_size: i8,

    /// Wall tokens per seat; defaults to the board size
    #[arg(long)]
    walls_per_seat: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Consecutive rejected submissions before a seat forfeits
    #[arg(long, default_value_t = 10)]
    max_rejections: u32,

    /// Record the matches' interactions as JSON files into this directory
    #[arg(short, long)]
    record_matches_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct SeriesScore {
    wins: [usize; 2],
    forfeits: [usize; 2],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_matches_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let client_configs = [
        ClientConfig::load(&args.seat_config_1)?,
        ClientConfig::load(&args.seat_config_2)?,
    ];
    let mut client_1 = SeatClient::from_config(&client_configs[0])?;
    let mut client_2 = SeatClient::from_config(&client_configs[1])?;

    let mut score = SeriesScore::default();
    for match_idx in 0..args.num_matches {
        let mut config = MatchConfig::two_player(args.board_size);
        if let Some(walls) = args.walls_per_seat {
            config.walls_per_seat = walls;
        }

        // Flip a coin for the seating: seat 0 always opens the match.
        let order: [usize; 2] = if rng.gen::<bool>() { [0, 1] } else { [1, 0] };
        for (seat, &client_idx) in order.iter().enumerate() {
            config.seats[seat].name = client_configs[client_idx].nick.clone();
        }
        let result = if order == [0, 1] {
            play_match(
                config,
                [&mut client_1, &mut client_2],
                args.max_rejections,
                &mut recorder,
            )?
        } else {
            play_match(
                config,
                [&mut client_2, &mut client_1],
                args.max_rejections,
                &mut recorder,
            )?
        };

        match result {
            MatchResult::WonBySeat { seat } => {
                let client_idx = order[seat];
                debug!(winner = &client_configs[client_idx].nick, match_idx);
                score.wins[client_idx] += 1;
            }
            MatchResult::ForfeitBySeat { seat, err } => {
                let client_idx = order[seat];
                info!(
                    client = &client_configs[client_idx].nick,
                    match_idx, "Forfeit after repeated rejections"
                );
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                score.forfeits[client_idx] += 1;
                score.wins[1 - client_idx] += 1;
            }
        }
    }

    let paren_1 = if score.forfeits[1] > 0 {
        format!(
            " ({} through forfeits by {})",
            score.forfeits[1], client_configs[1].nick
        )
    } else {
        String::new()
    };
    let paren_2 = if score.forfeits[0] > 0 {
        format!(
            " ({} through forfeits by {})",
            score.forfeits[0], client_configs[0].nick
        )
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}",
        score.wins[0], client_configs[0].nick, paren_1, score.wins[1], client_configs[1].nick,
        paren_2
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
