mod cli;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_wizard::config::{Config, FormKind};
use career_wizard::navigation::Transition;
use career_wizard::state::AppState;

use crate::cli::Console;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_wizard={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting career-wizard v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Form: {:?}, store: {}",
        config.form,
        config.store_path.display()
    );

    let state = AppState::new(config);
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());

    let transition = match state.config.form {
        FormKind::Resume => cli::run_resume(&state, &mut console).await?,
        FormKind::JobPosting => cli::run_job_posting(&mut console)?,
    };

    match transition {
        Some(Transition::Replace { screen, name }) => {
            console.say(format!(
                "-> {} {}",
                screen.path(),
                name.map(|n| format!("(hello, {n})")).unwrap_or_default()
            ))?;
        }
        Some(Transition::Back) => console.say("-> back")?,
        None => info!("Wizard closed without submitting"),
    }

    Ok(())
}
