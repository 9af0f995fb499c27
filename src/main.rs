//! Pool Duel - Main Binary
//!
//! Text-based two-player shared-pool card game

use clap::{Parser, Subcommand, ValueEnum};
use pool_duel::{
    effects::standard_rules,
    game::{
        FirstCardProvider, FixedScriptProvider, InteractiveProvider, MatchState, MoveProvider,
        RandomProvider, TurnEngine, VerbosityLevel, DEFAULT_MAX_ROUNDS,
    },
    GameError, Result,
};

/// Provider type for each seat
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderType {
    /// Prompt a human player via stdin
    Tui,
    /// Always reveals the front half and plays the first card
    First,
    /// Makes random choices
    Random,
    /// Fixed script of indices (requires --p1-fixed-inputs / --p2-fixed-inputs)
    Fixed,
}

/// Verbosity level (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "poolduel")]
#[command(about = "Pool Duel - two-player shared-pool card game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match
    Play {
        /// Player 1 (human seat) provider type
        #[arg(long, value_enum, default_value = "tui")]
        p1: ProviderType,

        /// Player 2 (opponent seat) provider type
        #[arg(long, value_enum, default_value = "first")]
        p2: ProviderType,

        /// Player 1 name
        #[arg(long, default_value = "Human")]
        p1_name: String,

        /// Player 2 name
        #[arg(long, default_value = "Computer")]
        p2_name: String,

        /// Fixed script for player 1 (space or comma separated indices, e.g. "0 2 1")
        #[arg(long, value_name = "CHOICES")]
        p1_fixed_inputs: Option<String>,

        /// Fixed script for player 2
        #[arg(long, value_name = "CHOICES")]
        p2_fixed_inputs: Option<String>,

        /// Random seed for deterministic matches
        #[arg(long)]
        seed: Option<u64>,

        /// Safety cap on rounds before the match is failed
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: u32,

        /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, short = 'v', default_value = "normal")]
        verbosity: VerbosityArg,

        /// Print the final match result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn build_provider(
    kind: ProviderType,
    fixed_inputs: Option<&str>,
    seed: Option<u64>,
) -> Result<Box<dyn MoveProvider>> {
    match kind {
        ProviderType::Tui => Ok(Box::new(InteractiveProvider::new())),
        ProviderType::First => Ok(Box::new(FirstCardProvider::new())),
        ProviderType::Random => Ok(match seed {
            Some(seed) => Box::new(RandomProvider::with_seed(seed)),
            None => Box::new(RandomProvider::new()),
        }),
        ProviderType::Fixed => {
            let inputs = fixed_inputs.ok_or_else(|| {
                GameError::InvalidAction(
                    "fixed provider requires --p1-fixed-inputs / --p2-fixed-inputs".to_string(),
                )
            })?;
            let provider =
                FixedScriptProvider::parse(inputs).map_err(GameError::InvalidAction)?;
            Ok(Box::new(provider))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            p1,
            p2,
            p1_name,
            p2_name,
            p1_fixed_inputs,
            p2_fixed_inputs,
            seed,
            max_rounds,
            verbosity,
            json,
        } => {
            let registry = standard_rules()?;

            let mut state = MatchState::new(p1_name, p2_name);
            state.logger.set_verbosity(verbosity.0);
            if let Some(seed) = seed {
                state.seed_rng(seed);
            }
            state.setup()?;

            state.logger.normal("===== Setup complete =====");
            state.logger.normal(&format!(
                "Human hand: {}, opponent hand: {}, public pool: {}, main pool: {}",
                state.players[0].hand.len(),
                state.players[1].hand.len(),
                state.public_pool.len(),
                state.main_pool.len()
            ));

            let mut human = build_provider(p1, p1_fixed_inputs.as_deref(), seed)?;
            let mut opponent = build_provider(p2, p2_fixed_inputs.as_deref(), seed.map(|s| s ^ 1))?;

            let mut engine = TurnEngine::new(&mut state, &registry).with_max_rounds(max_rounds);
            let result = engine.run(human.as_mut(), opponent.as_mut())?;

            if json {
                let rendered = serde_json::to_string_pretty(&result)
                    .map_err(|e| GameError::SerializationError(e.to_string()))?;
                println!("{}", rendered);
            }
            Ok(())
        }
    }
}
