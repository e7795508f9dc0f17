//! Signup form - terminal host for the generic form controller
//!
//! Renders one signup form with ratatui and drives its submissions through
//! the simulated collaborator.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use signup_form::app::App;
use signup_form::config::{FormConfig, FormVariant};
use signup_form::{
    Credentials, FormController, GenderedSignupValues, SignupValues, SimulatedSubmitter,
};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load()?;
    tracing::info!(variant = ?config.variant(), "Starting signup form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match config.variant() {
        FormVariant::Signup => run_form(&mut terminal, &config, SignupValues::default()).await,
        FormVariant::Gendered => {
            run_form(&mut terminal, &config, GenderedSignupValues::default()).await
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_form<B, T>(terminal: &mut Terminal<B>, config: &FormConfig, initial: T) -> Result<()>
where
    B: ratatui::backend::Backend,
    T: Credentials + Serialize,
{
    let controller = FormController::new(initial)
        .with_submitter(SimulatedSubmitter::new(config.submit_delay()))
        .with_submit_timeout(config.submit_timeout())
        .with_disable_when_invalid(config.disable_when_invalid());
    let mut app = App::new(controller);
    run_app(terminal, &mut app).await
}

async fn run_app<B, T>(terminal: &mut Terminal<B>, app: &mut App<T>) -> Result<()>
where
    B: ratatui::backend::Backend,
    T: Credentials,
{
    let poll_duration = Duration::from_millis(100);
    loop {
        // Draw the UI
        terminal.draw(|frame| signup_form::ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }

        // Collect a settled submission
        app.poll_submission().await?;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
