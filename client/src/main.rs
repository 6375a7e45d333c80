mod cli;
mod options;

use anyhow::{Context, Result};
use chess::{create_agent, ChessMapper, Engine, PieceValues};
use clap::Parser;
use cli::{AnalyzeCommand, Cli, Commands, PlayCommand};
use common::{get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use options::{parse_side, ClientOptions};
use play::{Driver, Ending, FormatAction, InitialGameState};
use search::SearchOptions;
use serde::Serialize;

const CONFIG_SCOPE: &str = "chess";
const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(args) => play(args),
        Commands::Analyze(args) => analyze(args),
    }
}

fn play(args: &PlayCommand) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut client_options: ClientOptions = config.load()?;
    if let Some(human) = &args.human {
        client_options.human = parse_side(human)?;
    }

    let search_options = search_options(&config, args.depth, args.algorithm.as_deref())?;
    let piece_values: PieceValues = config.load()?;
    info!("{:?}", search_options);

    let engine = Engine::with_piece_values(piece_values.clone());
    let mapper = ChessMapper::new();
    let state = match args.fen.as_ref().or(client_options.fen.as_ref()) {
        Some(fen) => mapper.parse_fen(fen)?,
        None => mapper.initial_game_state(),
    };

    let agent = create_agent(&engine, search_options, piece_values)?;
    let mut driver = Driver::new(&engine, &mapper, agent, client_options.human);

    let stdin = std::io::stdin();
    let outcome = driver.run(state, stdin.lock(), std::io::stdout())?;

    match outcome.ending {
        Ending::Terminal { score } => {
            info!("Finished in {} moves, score {}", outcome.history.len(), score)
        }
        Ending::Aborted => info!("Aborted after {} moves", outcome.history.len()),
    }

    Ok(())
}

#[derive(Serialize)]
struct AnalysisReport {
    fen: String,
    algorithm: String,
    depth: u32,
    score: f32,
    best_move: Option<String>,
    nodes: u64,
    elapsed_ms: u128,
}

fn analyze(args: &AnalyzeCommand) -> Result<()> {
    let config = load_config(&args.config)?;
    let search_options = search_options(&config, args.depth, args.algorithm.as_deref())?;
    let piece_values: PieceValues = config.load()?;

    let engine = Engine::with_piece_values(piece_values.clone());
    let mapper = ChessMapper::new();
    let fen = args.fen.clone().unwrap_or_else(|| STARTING_FEN.to_string());
    let state = mapper.parse_fen(&fen)?;

    let algorithm = search_options.algorithm.to_string();
    let mut agent = create_agent(&engine, search_options, piece_values)?;
    let report = agent.analyze(&state)?;

    let report = AnalysisReport {
        fen,
        algorithm,
        depth: report.depth,
        score: report.result.score,
        best_move: report
            .result
            .action
            .map(|action| mapper.format_action(&state, &action)),
        nodes: report.nodes,
        elapsed_ms: report.elapsed.as_millis(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn load_config(path: &str) -> Result<ConfigLoader> {
    let config_path = path.relative_to_cwd()?;

    if config_path.is_file() {
        ConfigLoader::new(config_path, CONFIG_SCOPE.to_string())
    } else {
        warn!("Config file {:?} not found, using defaults", config_path);
        ConfigLoader::from_str("{}", CONFIG_SCOPE.to_string())
    }
}

fn search_options(
    config: &ConfigLoader,
    depth: Option<u32>,
    algorithm: Option<&str>,
) -> Result<SearchOptions> {
    let mut options: SearchOptions = config.load()?;

    if let Some(env_depth) = get_env_usize("SEARCH_DEPTH")? {
        options.depth = u32::try_from(env_depth).context("SEARCH_DEPTH is too large")?;
    }

    if let Some(depth) = depth {
        options.depth = depth;
    }

    if let Some(algorithm) = algorithm {
        options.algorithm = algorithm.parse()?;
    }

    Ok(options)
}
