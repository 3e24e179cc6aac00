use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::Result;

use wcm_modal::{
    app::{App, seed_demo},
    client::LocalClient,
    constants::TICK_RATE,
    context::ModalContext,
    event::Action,
    handler::handle_event,
    logging,
    state::{
        ModalConfig,
        platform::{AppPaths, Device, FileStorage, KeyValueStorage, MemoryStorage},
    },
    tui::{self, Tui},
    ui,
};

/// Wallet connection modal in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Behave as a mobile device
    #[arg(long)]
    mobile: bool,

    /// Behave as an Android device
    #[arg(long, conflicts_with = "mobile")]
    android: bool,

    /// Session URI to use instead of a pairing URI (standalone mode)
    #[arg(long, value_name = "URI")]
    standalone_uri: Option<String>,

    /// Disable the account view and balance fetching
    #[arg(long)]
    no_account_view: bool,

    /// Configuration file to load instead of the default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn device(&self) -> Device {
        if self.android {
            Device::Android
        } else if self.mobile {
            Device::Mobile
        } else {
            Device::Desktop
        }
    }

    fn load_config(&self) -> Result<ModalConfig> {
        let mut config = match &self.config {
            Some(path) => ModalConfig::load_from(path).map_err(|e| e.into_report())?,
            None => ModalConfig::load(),
        };
        if let Some(uri) = &self.standalone_uri {
            config.standalone_uri = Some(uri.clone());
        }
        if self.no_account_view {
            config.enable_account_view = false;
        }
        Ok(config)
    }
}

fn open_storage(paths: &AppPaths) -> Arc<dyn KeyValueStorage> {
    match FileStorage::in_data_dir(paths) {
        Ok(storage) => {
            tracing::debug!(path = %storage.path().display(), "using file storage");
            Arc::new(storage)
        }
        Err(err) => {
            tracing::warn!("File storage unavailable, keeping state in memory: {err}");
            Arc::new(MemoryStorage::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let paths = AppPaths::new();
    let _log_guard = match logging::init(&paths) {
        Ok((_, guard)) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    };

    let config = cli.load_config()?;
    let client = LocalClient::new(config.chains.clone());
    let ctx = ModalContext::builder(config, Arc::new(client.clone()))
        .storage(open_storage(&paths))
        .device(cli.device())
        .build();
    seed_demo(&ctx, &client);
    tracing::info!(device = ?ctx.device(), "starting modal demo");

    let mut app = App::new(ctx, client).map_err(|e| e.into_report())?;

    let mut terminal = tui::init()?;
    let result = run_app(&mut terminal, &mut app).await;
    tui::restore()?;
    result
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        let event_ready = crossterm::event::poll(Duration::from_millis(1))?;
        if event_ready {
            let event = crossterm::event::read()?;
            if let Some(action) = handle_event(&event) {
                dispatch(app, action);
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            dispatch(app, Action::Tick);
        }

        if !event_ready {
            let remaining = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_millis(5));
            tokio::time::sleep(remaining.min(Duration::from_millis(50))).await;
        }
    }
    Ok(())
}

fn dispatch(app: &mut App, action: Action) {
    if let Err(err) = app.update(action) {
        app.report_error(&err);
    }
}
