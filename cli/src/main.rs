use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use parlor_core::blackjack::BlackjackTable;
use parlor_core::ledger::{CsvLedger, LedgerError, load_or_default, validate_player_id};
use parlor_core::minesweeper::{BoardConfig, Minesweeper};
use tracing_subscriber::filter::LevelFilter;

use settings::Settings;

mod blackjack;
mod command;
mod minesweeper;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand, Debug)]
enum Game {
    /// Play blackjack against the house
    Blackjack {
        /// Name the ledger keeps chips under
        #[arg(short, long, default_value = "player", value_parser = parse_player_id)]
        player: String,

        /// Player ledger file
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Decks in the shoe
        #[arg(long)]
        decks: Option<u8>,
    },
    /// Play minesweeper
    Minesweeper {
        /// beginner, intermediate or expert
        #[arg(long, conflicts_with_all = ["rows", "cols", "mines"])]
        preset: Option<String>,

        #[arg(long, requires_all = ["cols", "mines"])]
        rows: Option<u8>,

        #[arg(long, requires_all = ["rows", "mines"])]
        cols: Option<u8>,

        #[arg(long, requires_all = ["rows", "cols"])]
        mines: Option<u16>,
    },
}

fn parse_player_id(id: &str) -> Result<String, LedgerError> {
    validate_player_id(id).map(str::to_owned)
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let mut settings = Settings::load(args.config.as_deref())?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match args.game {
        Game::Blackjack {
            player,
            ledger,
            decks,
        } => {
            let config = &mut settings.blackjack;
            if let Some(seed) = args.seed {
                config.seed = Some(seed);
            }
            if let Some(decks) = decks {
                config.decks = decks;
            }
            let ledger_path = ledger.unwrap_or(settings.ledger_path);

            let mut ledger = CsvLedger::new(ledger_path);
            let bankroll = load_or_default(&ledger, &player, config.fresh_bankroll());
            let mut table = BlackjackTable::from_config(config, bankroll);
            log::info!("{} sits down with {} chips", player, bankroll.total_chips);

            blackjack::run(&mut table, &mut ledger, &player, stdin, &mut stdout)
        }
        Game::Minesweeper {
            preset,
            rows,
            cols,
            mines,
        } => {
            let config = &mut settings.minesweeper;
            if let Some(seed) = args.seed {
                config.seed = Some(seed);
            }
            if let Some(name) = preset {
                config.board = BoardConfig::preset(&name)
                    .with_context(|| format!("Unknown preset {name:?}"))?;
            }
            if let (Some(rows), Some(cols), Some(mines)) = (rows, cols, mines) {
                config.board = BoardConfig::new(rows, cols, mines)?;
            }

            let mut game = Minesweeper::from_config(config)?;
            log::info!("Minesweeper {:?}, seed {}", config.board, game.seed());

            minesweeper::run(&mut game, stdin, &mut stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn player_ids_must_fit_the_ledger() {
        assert!(Args::try_parse_from(["parlor", "blackjack", "--player", "a,b"]).is_err());
        assert!(Args::try_parse_from(["parlor", "blackjack", "--player", ""]).is_err());

        let args = Args::try_parse_from(["parlor", "blackjack", "-p", "ann"]).unwrap();
        assert!(matches!(args.game, Game::Blackjack { ref player, .. } if player == "ann"));
    }

    #[test]
    fn board_flags_go_together() {
        assert!(Args::try_parse_from(["parlor", "minesweeper", "--rows", "9"]).is_err());
        assert!(
            Args::try_parse_from(["parlor", "minesweeper", "--preset", "expert", "--rows", "9"])
                .is_err()
        );
        let args = Args::try_parse_from([
            "parlor", "--seed", "4", "minesweeper", "--rows", "9", "--cols", "9", "--mines", "10",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(4));
        assert!(matches!(
            args.game,
            Game::Minesweeper {
                rows: Some(9),
                cols: Some(9),
                mines: Some(10),
                ..
            }
        ));
    }
}
