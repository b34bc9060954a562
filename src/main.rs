use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thermo_dial::store::KeyValueStore;
use thermo_dial::ui::{Panel, ThermometerLayout, ThermometerRenderer};
use thermo_dial::{FileStore, Intent, MemoryStore, StatePersistence, Unit, WidgetConfig, WidgetController};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "thermo-dial")]
#[command(about = "Interactive temperature converter")]
struct Cli {
    /// TOML file overriding widget settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the saved inputs (defaults to the platform data dir)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Keep saved inputs in memory only
    #[arg(long, conflicts_with = "state_dir")]
    memory: bool,

    /// Write the thermometer as a PNG to this path after every command
    #[arg(long)]
    thermometer: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "thermo_dial=info".into()),
    );

    // stdout belongs to the panel
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_command(line: &str) -> anyhow::Result<Option<Intent>> {
    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    let intent = match command {
        "" | "show" => return Ok(None),
        "type" => Intent::EditInput(arg.to_string()),
        "slide" => Intent::MoveSlider(arg.parse().with_context(|| format!("not a number: '{arg}'"))?),
        "from" => Intent::ChangeFromUnit(arg.parse::<Unit>()?),
        "to" => Intent::ChangeToUnit(arg.parse::<Unit>()?),
        "swap" => Intent::Swap,
        "clear" => Intent::Clear,
        "submit" => Intent::Submit,
        "live" => match arg {
            "on" => Intent::SetLive(true),
            "off" => Intent::SetLive(false),
            _ => bail!("usage: live on|off"),
        },
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(intent))
}

fn open_store(cli: &Cli) -> anyhow::Result<Box<dyn KeyValueStore>> {
    if cli.memory {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = match &cli.state_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default().context("no data directory available, try --memory")?,
    };
    tracing::debug!(dir = %store.dir().display(), "using file store");
    Ok(Box::new(store))
}

fn write_thermometer(controller: &WidgetController, path: &Path) {
    let renderer = ThermometerRenderer::new();
    let result = ThermometerLayout::new(controller.state().intensity.as_ref(), 60, 240, 1.0)
        .and_then(|layout| renderer.save_png(&layout, path));
    if let Err(e) = result {
        tracing::warn!(path = %path.display(), error = %e, "failed to write thermometer");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WidgetConfig::default(),
    };

    let persistence = StatePersistence::with_key(open_store(&cli)?, config.storage_key.clone());
    let mut controller = WidgetController::new(config, persistence);

    println!("commands: type <text> | slide <n> | from <unit> | to <unit> | swap | clear | live on|off | submit | show | quit");
    println!("{}", Panel::new(controller.state()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let intent = match parse_command(&line) {
            Ok(intent) => intent,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        if let Some(intent) = intent {
            let outcome = controller.dispatch(intent, Instant::now());
            if outcome.focus_input {
                println!("(focus: input)");
            }

            // Stand-in for the host's per-frame callback
            if let Some(ticket) = outcome.animation {
                let mut stdout = io::stdout();
                while let Some(frame) = controller.on_frame(ticket, Instant::now()) {
                    print!("\r{:>12}", frame.text);
                    stdout.flush()?;
                    if frame.finished {
                        break;
                    }
                    thread::sleep(FRAME_INTERVAL);
                }
                println!();
            }
        }

        if let Some(path) = &cli.thermometer {
            write_thermometer(&controller, path);
        }
        println!("{}", Panel::new(controller.state()));
    }

    Ok(())
}
