use anyhow::Result;
use clap::{Parser, ValueEnum};

use burger_shift::scene::{DrawList, HeadlessGraphics, HiddenMode, Millis};
use burger_shift::simulation::{AutoPlayer, Game, GameConfig};

#[derive(Parser)]
#[command(name = "burger_shift")]
#[command(about = "Restaurant shift game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value = "40000")]
    ticks: u32,

    /// Real length of one shift in seconds
    #[arg(long, default_value = "600")]
    shift_seconds: u64,

    /// In-game hour the shift starts at
    #[arg(long, default_value = "9")]
    start_hour: u32,

    /// In-game hour the shift ends at
    #[arg(long, default_value = "17")]
    end_hour: u32,

    /// Seed for the headless autoplayer
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the `Assets/` tree; missing files under it are errors
    /// (headless mode accepts any path when this is unset)
    #[arg(long)]
    asset_root: Option<String>,

    /// What hiding a node suppresses
    #[arg(long, value_enum, default_value = "keep-updating")]
    hidden_mode: HiddenModeArg,

    /// Print a summary every this many ticks in headless mode
    #[arg(long, default_value = "3600")]
    report_every: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum HiddenModeArg {
    KeepUpdating,
    Suspend,
}

impl From<HiddenModeArg> for HiddenMode {
    fn from(arg: HiddenModeArg) -> Self {
        match arg {
            HiddenModeArg::KeepUpdating => HiddenMode::KeepUpdating,
            HiddenModeArg::Suspend => HiddenMode::Suspend,
        }
    }
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            shift_start_hour: self.start_hour,
            shift_end_hour: self.end_hour,
            shift_duration_ms: self.shift_seconds * 1000,
            hidden_mode: self.hidden_mode.into(),
            ..GameConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            if let Err(err) = run_with_ui(&cli) {
                eprintln!("Error: {err:#}");
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else if let Err(err) = run_headless(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Run the game in headless mode (no graphics) with a random player
fn run_headless(cli: &Cli) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("burger_shift=info"))
        .init();

    let config = cli.config();
    let tick_ms = config.tick_ms();

    println!("Running Burger Shift in headless mode...");
    println!(
        "Ticks: {}, {}ms per tick, shift {}:00 to {}:00 over {}s",
        cli.ticks, tick_ms, config.shift_start_hour, config.shift_end_hour, cli.shift_seconds
    );
    println!();

    let mut gfx = match &cli.asset_root {
        Some(root) => HeadlessGraphics::with_asset_root(root),
        None => HeadlessGraphics::new(),
    };
    let mut canvas = DrawList::new();
    let mut now = Millis(0);
    let mut game = Game::new(config, &mut gfx, now)?;

    // Roughly three clicks per second
    let mut player = match cli.seed {
        Some(seed) => AutoPlayer::new_with_seed(20, seed),
        None => AutoPlayer::new(20),
    };

    println!("Initial state:");
    game.print_summary(now);
    println!();

    let report_every = cli.report_every.max(1);
    let mut tick = 0;
    while tick < cli.ticks && !game.quit_requested() {
        tick += 1;
        now = now.plus(tick_ms);
        let events = player.next_events(&game);
        canvas.clear();
        game.tick(now, &events, &mut gfx, &mut canvas);

        if tick % report_every == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time, {} draws) ---",
                tick,
                now.0 as f64 / 1000.0,
                canvas.len()
            );
            game.print_summary(now);
            println!();
        }

        if game.session().is_over() {
            break;
        }
    }

    if game.session().is_over() {
        println!("=== SHIFT COMPLETE ===");
    } else {
        println!("=== Final State ===");
    }
    game.print_summary(now);
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(cli: &Cli) -> Result<()> {
    use anyhow::Context;
    use bevy::asset::AssetPlugin;
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Burger Shift UI...");
    println!();
    println!("Controls:");
    println!("  Left click  - Press buttons");
    println!("  ESC         - Exit");
    println!();

    let root = cli.asset_root.as_deref().unwrap_or(".");
    let asset_root = std::fs::canonicalize(root)
        .with_context(|| format!("asset root {root} is not accessible"))?;
    let file_path = asset_root.to_string_lossy().into_owned();

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,burger_shift=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Burger Shift".into(),
                        resolution: (1280, 720).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path,
                    ..default()
                }),
        )
        .add_plugins(burger_shift::ui::BurgerShiftUIPlugin::new(
            cli.config(),
            asset_root,
        ))
        .run();

    if exit.is_error() {
        anyhow::bail!("the game stopped with an error, see the log above");
    }
    Ok(())
}
