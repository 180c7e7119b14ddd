use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::info;

use lakeview::app::action::Action;
use lakeview::app::effect::Effect;
use lakeview::app::effect_runner::EffectRunner;
use lakeview::app::reducer::reduce;
use lakeview::app::render_schedule::next_deadline;
use lakeview::app::state::AppState;
use lakeview::error;
use lakeview::infra::adapters::{HttpCatalogApi, HttpGateway};
use lakeview::infra::config::AppConfig;
use lakeview::infra::config::app_config::URL_ENV_VAR;
use lakeview::infra::logging::init_logging;
use lakeview::ui::adapters::TuiAdapter;
use lakeview::ui::event::handler::handle_event;
use lakeview::ui::tui::TuiRunner;

/// Terminal explorer for a lakehouse catalog backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend API base URL (overrides config and LAKEVIEW_URL)
    #[arg(long)]
    url: Option<String>,

    /// Path to a config.toml (defaults to <config_dir>/lakeview/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).wrap_err("Failed to load config")?;
    config.apply_overrides(std::env::var(URL_ENV_VAR).ok(), args.url);
    config.validate()?;

    let log_path = init_logging(&config.log_level)?;
    info!(base_url = %config.base_url, log = %log_path.display(), "starting");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let gateway = HttpGateway::new(&config.base_url).wrap_err("Failed to build HTTP client")?;
    let effect_runner = EffectRunner::new(Arc::new(HttpCatalogApi::new(gateway)), action_tx.clone());

    let mut state = AppState::new(config.to_settings());

    let mut tui = TuiRunner::new()?;
    tui.enter()?;
    let started_at = Instant::now();

    let _ = action_tx.send(Action::Init).await;

    loop {
        let now = Instant::now();
        let deadline = next_deadline(&state, now);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui, started_at);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
                state.clear_dirty();
            }
            // Spinner frame, toast expiry or a debounce timer
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                for action in state.debouncer.take_due(now) {
                    let _ = action_tx.send(action).await;
                }
                state.clear_expired_timers(now);
                let effects = reduce(&mut state, Action::Render, now);
                let mut tui_adapter = TuiAdapter::new(&mut tui, started_at);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    info!("exiting");
    Ok(())
}
