mod api;
mod app;
mod config;
mod logging;
mod study;
mod token;
mod ui;

use crate::api::HttpStudyApi;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::route::Route;
use crate::app::state::AppState;
use crate::config::prefs::Prefs;
use crate::study::{Advance, StudyApi};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Parser, Debug)]
#[command(name = "eisaku", version, about = "Japanese-to-English composition study in the terminal")]
struct Cli {
    /// Category to study (defaults to the last one studied)
    #[arg(short, long, env = "EISAKU_CATEGORY")]
    category: Option<String>,

    /// Open the token redemption history instead of the start screen
    #[arg(long)]
    tokens: bool,

    /// Path to config.toml
    #[arg(long, env = "EISAKU_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config(cli.config.as_deref())?;
    logging::init(&cfg.logging)?;

    let api = HttpStudyApi::new(&cfg.api).context("Failed to build HTTP client")?;
    let mut prefs = Prefs::load();

    let category = cli
        .category
        .or_else(|| prefs.prev_category().map(String::from))
        .or_else(|| cfg.study.default_category.clone());
    let route = if cli.tokens {
        Route::Tokens
    } else {
        Route::start(category.as_deref())
    };
    info!(category = ?category, route = %route.path(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let state = AppState::new(cfg, category, route);
    let result = run_app(&mut terminal, state, &api, &mut prefs).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    mut state: AppState,
    api: &dyn StudyApi,
    prefs: &mut Prefs,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = std::time::Duration::from_millis(state.config.ui.tick_rate_ms.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Entering on the token screen needs its data
    if state.route == Route::Tokens {
        load_tokens(terminal, &mut state, api).await?;
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Navigate(route) => navigate(terminal, &mut state, api, prefs, route).await?,
                Action::Advance => {
                    begin_request(terminal, &mut state)?;
                    let outcome = state.wizard.advance(api).await;
                    state.busy = false;
                    match outcome {
                        Ok(Advance::Moved(_)) => state.load_editor(),
                        Ok(Advance::Finished(route)) => {
                            navigate(terminal, &mut state, api, prefs, route).await?
                        }
                        Ok(Advance::Blocked) | Ok(Advance::Rejected) => {}
                        Err(e) => {
                            error!(error = %e, step = state.wizard.step().index(), "study request failed");
                            state.status_message = Some(format!("通信エラー: {}", e));
                        }
                    }
                }
                Action::Skip => {
                    begin_request(terminal, &mut state)?;
                    let outcome = state.wizard.skip(api).await;
                    state.busy = false;
                    match outcome {
                        Ok(route) => navigate(terminal, &mut state, api, prefs, route).await?,
                        Err(e) => {
                            error!(error = %e, "skip failed");
                            state.status_message = Some(format!("通信エラー: {}", e));
                        }
                    }
                }
                Action::LoadTokens => load_tokens(terminal, &mut state, api).await?,
                Action::Quit => {
                    state.should_quit = true;
                }
            }
            state.dirty = true;
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Mark a remote call as in flight and show it before awaiting.
fn begin_request(terminal: &mut Tui, state: &mut AppState) -> Result<()> {
    state.busy = true;
    terminal.draw(|f| ui::render(f, state))?;
    Ok(())
}

async fn navigate(
    terminal: &mut Tui,
    state: &mut AppState,
    api: &dyn StudyApi,
    prefs: &mut Prefs,
    route: Route,
) -> Result<()> {
    info!(path = %route.path(), "navigate");
    match route {
        Route::Study { slug } => {
            if slug.is_some() {
                state.category = slug.clone();
            }
            state.reset_wizard();
            state.set_route(Route::Study { slug });
            begin_request(terminal, state)?;
            let redirect = state.wizard.mount(api, prefs).await;
            state.busy = false;
            if let Some(redirect) = redirect {
                state.status_message = Some("お題を取得できませんでした".to_string());
                state.set_route(redirect);
            }
        }
        Route::Tokens => {
            state.set_route(route);
            load_tokens(terminal, state, api).await?;
        }
        Route::Start { .. } | Route::Record { .. } => state.set_route(route),
    }
    Ok(())
}

async fn load_tokens(terminal: &mut Tui, state: &mut AppState, api: &dyn StudyApi) -> Result<()> {
    begin_request(terminal, state)?;
    let result = api.token_requests().await;
    state.busy = false;
    match result {
        Ok(requests) => {
            info!(count = requests.len(), "token requests loaded");
            state.tokens.replace(requests);
        }
        Err(e) => {
            warn!(error = %e, "failed to load token requests");
            state.tokens.error = Some(format!("読み込みに失敗しました: {}", e));
        }
    }
    state.dirty = true;
    Ok(())
}
