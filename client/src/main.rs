mod app;
mod board_ui;
mod computer_timer;
mod config;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use eframe::egui;
use tictactoe_engine::{BotType, GameMode, GameSession, SessionRng, log, logger};

use app::TicTacToeApp;
use config::get_config_manager;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    HumanVsHuman,
    HumanVsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsComputer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(bot: BotArg) -> Self {
        match bot {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the mode stored in the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Pause before the computer replies, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the random bot.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager();
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Using default config: {}", e);
        Default::default()
    });

    let mode = args.mode.map(GameMode::from).unwrap_or(config.mode);
    let bot = args.bot.map(BotType::from).unwrap_or(config.bot);
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.computer_delay_ms));
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Starting {} with {:?} bot, seed {}", mode, bot, rng.seed());
    let session = GameSession::new(mode, bot, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_title("TicTacToe"),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(session, delay, config_manager)))),
    )?;

    Ok(())
}
