mod api_client;
mod display;
mod errors;
mod form;
mod local_store;
mod logging;
mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use resume_models::SaveFullJsonRequest;

use crate::api_client::ApiClient;
use crate::form::Console;
use crate::session::{Decision, Session};

#[derive(Parser, Debug)]
#[command(
    name = "resume-intake",
    version,
    about = "Upload a resume, review the extraction and confirm the candidate profile"
)]
struct Cli {
    /// Resume to upload (.pdf or .docx)
    resume: PathBuf,

    /// Extraction service base URL
    #[arg(long, default_value = "http://localhost:8000")]
    server: String,

    /// Directory for the local copy of the confirmed profile
    #[arg(long, default_value = "resumes")]
    output_dir: PathBuf,

    /// Accept the extraction without asking
    #[arg(long, conflicts_with = "reject")]
    accept: bool,

    /// Reject the extraction without asking and fill the form by hand
    #[arg(long)]
    reject: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let client = ApiClient::new(&cli.server);
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    let extraction = client
        .extract_file(&cli.resume)
        .await
        .context("Extraction failed")?;
    display::render_extraction(&mut io::stdout(), &extraction)?;

    let session = Session::Idle.extracted(extraction)?;

    let decision = match (cli.accept, cli.reject) {
        (true, _) => Decision::Accepted,
        (_, true) => Decision::Rejected,
        _ => console
            .ask_decision()?
            .context("no decision given; extraction left unconfirmed")?,
    };
    let session = session.decide(decision)?;
    console.say(match session.decision().unwrap_or(decision) {
        Decision::Accepted => "Extraction confirmed. Form will be autofilled.",
        Decision::Rejected => "Extraction rejected. Please fill the form manually.",
    })?;

    let profile = form::collect_profile(&mut console, &session.form_defaults())?;

    let extraction_id = session
        .extraction_id()
        .context("session lost its extraction id")?
        .to_string();
    let saved = client
        .save_full_json(&SaveFullJsonRequest {
            extraction_id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
        })
        .await;
    let saved = match saved {
        Ok(saved) => saved,
        Err(err) => {
            console.say(&format!("Save failed: {err}"))?;
            if err.is_not_found() {
                console.say("The extraction expired or was already saved; upload the resume again.")?;
            }
            return Err(err.into());
        }
    };

    let local_path = match local_store::save_local_copy(&cli.output_dir, &profile).await {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!(error = %err, "local copy not written");
            console.say(&format!("Local copy not saved: {err}"))?;
            None
        }
    };

    let session = session.submitted(saved.filepath, local_path)?;
    if let Session::Submitted {
        service_path,
        local_path,
    } = &session
    {
        console.say(&format!("{} to {service_path}", saved.message))?;
        if let Some(path) = local_path {
            console.say(&format!("Local copy: {}", path.display()))?;
        }
    }
    console.say(&serde_json::to_string_pretty(&profile)?)?;

    Ok(())
}
