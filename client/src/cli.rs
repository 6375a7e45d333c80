use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Adversarial Search Client")]
#[clap(about = "Plays chess against a game-tree search engine", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
#[clap(about = "Plays a game with moves typed in SAN.", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Side played from the terminal: white, black or none.
    #[clap(long)]
    pub human: Option<String>,

    /// Starting position in FEN.
    #[clap(long)]
    pub fen: Option<String>,

    #[clap(short, long)]
    pub depth: Option<u32>,

    #[clap(short, long)]
    pub algorithm: Option<String>,
}

#[derive(Args)]
#[clap(about = "Searches a single position and prints a JSON report.", long_about = None)]
pub struct AnalyzeCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Position in FEN. Defaults to the initial position.
    #[clap(long)]
    pub fen: Option<String>,

    #[clap(short, long)]
    pub depth: Option<u32>,

    #[clap(short, long)]
    pub algorithm: Option<String>,
}
