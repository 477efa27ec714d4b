use anyhow::Context;
use casino_holdem_ev::hand::{parse_input, Flop, HoleCards};
use casino_holdem_ev::report;
use casino_holdem_ev::simulation::{CancelToken, Method, SimulationConfig, Simulator};
use casino_holdem_ev::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use dialoguer::Input;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "casino-holdem-ev",
    version,
    about = "Expected value of calling in Casino Hold'em",
    long_about = "Estimate the EV of calling versus folding in Casino Hold'em from your two hole \
                  cards and the flop, including the bonus side bet.\n\
                  Cards are two characters: rank 23456789TJQKA, suit shdc (e.g. \"As Kd\")."
)]
struct Args {
    /// Your two hole cards, e.g. "As Kd" (prompted for when missing)
    #[arg(long)]
    hole: Option<String>,

    /// The three flop cards, e.g. "2c Jh 9s" (prompted for when missing)
    #[arg(long)]
    flop: Option<String>,

    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = casino_holdem_ev::simulation::DEFAULT_TRIALS)]
    trials: u64,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (default: rayon's global pool)
    #[arg(long)]
    threads: Option<usize>,

    /// Trials per batch
    #[arg(long, default_value_t = casino_holdem_ev::simulation::DEFAULT_BATCH_SIZE)]
    batch_size: u64,

    /// Enumerate every completion instead of sampling
    #[arg(long)]
    exact: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Open the interactive card picker
    #[arg(long)]
    tui: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let mut cfg = SimulationConfig::default()
            .with_trials(self.trials)
            .with_batch_size(self.batch_size)
            .with_method(if self.exact { Method::Exact } else { Method::MonteCarlo });
        if let Some(seed) = self.seed {
            cfg = cfg.with_seed(seed);
        }
        if let Some(threads) = self.threads {
            cfg = cfg.with_threads(threads);
        }
        cfg
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn prompt(text: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .interact_text()
        .with_context(|| format!("reading input for '{text}'"))
}

fn read_cards(args: &Args) -> anyhow::Result<(HoleCards, Flop)> {
    let hole = match &args.hole {
        Some(h) => h.clone(),
        None => prompt("Enter your two hole cards (e.g., 'As Kd')")?,
    };
    let flop = match &args.flop {
        Some(f) => f.clone(),
        None => prompt("Enter the three flop cards (e.g., '2c Jh 9s')")?,
    };
    Ok(parse_input(&hole, &flop)?)
}

fn run_cli(args: &Args) -> anyhow::Result<()> {
    let (hole, flop) = read_cards(args)?;
    let config = args.config();
    let sim = Simulator::new(hole, flop, config)?;
    if !args.json {
        eprintln!("Running simulations... (this may take a few seconds)");
    }
    let result = sim.execute(&CancelToken::new())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&hole, &flop, &result));
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(args: &Args) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "casino-holdem-ev picker requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            casino_holdem_ev::VERSION
        );
        return Ok(());
    }
    let mut app = AppState::default();
    app.config = args.config();

    let mut terminal = setup_terminal().context("setting up terminal")?;
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(100));

    // Always attempt to restore terminal
    restore_terminal(terminal).context("restoring terminal")?;
    Ok(res?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.tui {
        return run_tui(&args);
    }
    init_logging(args.verbose);
    run_cli(&args)
}
