//! CareerSync binary - interactive console wizard.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use career_sync::adapters::console::ConsoleRenderer;
use career_sync::adapters::matching::{HttpMatchConfig, HttpMatchProvider};
use career_sync::application::{MatchSession, SubmitError};
use career_sync::config::AppConfig;
use career_sync::domain::SubmissionState;
use career_sync::ports::{Renderer, WizardView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let provider = HttpMatchProvider::new(
        HttpMatchConfig::new(&config.service.base_url).with_timeout(config.service.timeout()),
    );

    match provider_health(&provider).await {
        Some(careers) => tracing::info!(careers, "matching service ready"),
        None => tracing::warn!("matching service not ready; submissions may fail"),
    }

    let mut session = MatchSession::with_default_catalog(Arc::new(provider));
    let mut renderer = ConsoleRenderer::new(io::stdout());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Career Path Finder");
    println!("Answer the questions, then submit to see your top career matches.");
    println!("Commands: (n)ext, (b)ack, (s)ubmit on the last step, (q)uit.");

    loop {
        renderer.render_step(&WizardView::from_controller(session.wizard()));

        // Collect the current step's answers; a blank line keeps the value.
        let fields: Vec<(String, String)> = WizardView::from_controller(session.wizard())
            .fields
            .into_iter()
            .map(|f| (f.key, f.prompt))
            .collect();
        for (key, prompt) in fields {
            print!("{}\n> ", prompt);
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if !line.trim().is_empty() {
                session.set_answer(&key, line.trim());
            }
        }

        print!("command [n/b/s/q]: ");
        io::stdout().flush()?;
        let Some(command) = lines.next().transpose()? else {
            return Ok(());
        };

        match command.trim() {
            "b" => {
                session.wizard_mut().retreat();
            }
            "s" if session.wizard().is_last_step() => match session.submit().await {
                Ok(state) => {
                    renderer.render_submission(state);
                    if matches!(state, SubmissionState::Succeeded(_)) {
                        return Ok(());
                    }
                }
                Err(SubmitError::ValidationFailed(_)) => {
                    println!("Some required answers are missing.");
                }
                Err(SubmitError::AlreadyInFlight) => {
                    println!("A submission is already in progress.");
                }
            },
            "q" => return Ok(()),
            _ => {
                if !session.wizard_mut().advance() && !session.wizard().is_last_step() {
                    println!("Please fill the required answers before continuing.");
                }
            }
        }
    }
}

async fn provider_health(provider: &HttpMatchProvider) -> Option<u64> {
    use career_sync::ports::MatchProvider;

    match provider.health().await {
        Ok(health) if health.is_ready() => Some(health.careers),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("health check failed: {}", e);
            None
        }
    }
}
