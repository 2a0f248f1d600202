//! `insight-hub`: command-line front end for the transcript and icebreaker
//! service.
//!
//! Each invocation mirrors both collections, runs at most one create or
//! delete through the sync controller, then prints the status slot and the
//! affected feed. A failed operation exits non-zero with the status text.

mod render;

use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use feeds::config::ConfigError;
use feeds::feed::FeedSnapshot;
use feeds::form::{DEFAULT_ROLE_LEVEL, IcebreakerField, TranscriptField, suggested_prompt};
use feeds::{
    ApiError, Dispatch, HttpResourceClient, Icebreakers, NetworkError, RecordId, StatusMessage, SyncConfig,
    SyncController, Transcripts,
};
use render::View;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Client(#[from] NetworkError),
    #[error("service unreachable: {0}")]
    Unreachable(#[from] ApiError),
    #[error("could not read {field} from {path}: {source}")]
    ReadInput {
        field: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "insight-hub", about = "Call transcript insights and LinkedIn icebreakers")]
struct Cli {
    /// Service base URL. Overrides `HUB_API_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Log sync activity to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the service answers.
    Ping,
    /// Print the mirrored feeds.
    Feed {
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,
    },
    Transcript(TranscriptCommand),
    Icebreaker(IcebreakerCommand),
}

#[derive(Args, Debug)]
struct TranscriptCommand {
    #[command(subcommand)]
    command: TranscriptSubcommand,
}

#[derive(Subcommand, Debug)]
enum TranscriptSubcommand {
    /// Upload a call transcript for analysis.
    Create(TranscriptCreateArgs),
    Delete { id: RecordId },
}

#[derive(Args, Debug)]
struct TranscriptCreateArgs {
    #[arg(long)]
    company_name: String,
    #[arg(long)]
    attendees: String,
    /// Call date as `YYYY-MM-DD`.
    #[arg(long)]
    date: String,
    #[arg(long, required_unless_present = "transcript_file", conflicts_with = "transcript_file")]
    transcript: Option<String>,
    /// Read the transcript from a file, or `-` for stdin.
    #[arg(long)]
    transcript_file: Option<String>,
    #[arg(long, default_value = "")]
    custom_prompt: String,
}

#[derive(Args, Debug)]
struct IcebreakerCommand {
    #[command(subcommand)]
    command: IcebreakerSubcommand,
}

#[derive(Subcommand, Debug)]
enum IcebreakerSubcommand {
    /// Generate an icebreaker analysis for a prospect.
    Create(IcebreakerCreateArgs),
    Delete { id: RecordId },
}

#[derive(Args, Debug)]
struct IcebreakerCreateArgs {
    #[arg(long)]
    prospect_name: String,
    #[arg(long)]
    company_name: String,
    #[arg(long, required_unless_present = "linkedin_bio_file", conflicts_with = "linkedin_bio_file")]
    linkedin_bio: Option<String>,
    #[arg(long)]
    linkedin_bio_file: Option<String>,
    #[arg(long, required_unless_present = "pitch_deck_file", conflicts_with = "pitch_deck_file")]
    pitch_deck: Option<String>,
    #[arg(long)]
    pitch_deck_file: Option<String>,
    #[arg(long, default_value = DEFAULT_ROLE_LEVEL)]
    role_level: String,
    #[arg(long, default_value = "", conflicts_with = "suggested_prompt")]
    custom_prompt: String,
    /// Use the built-in buying-signals prompt for this company and role.
    #[arg(long)]
    suggested_prompt: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = SyncConfig::from_env_with_base_url(cli.base_url.as_deref())?;
    let client = HttpResourceClient::new(&config)?;

    if matches!(cli.command, Command::Ping) {
        let message = client.ping().await?;
        println!("{}: {message}", client.base_url());
        return Ok(());
    }

    let controller = SyncController::new(client);
    controller.bootstrap().await;

    match cli.command {
        Command::Ping => Ok(()),
        Command::Feed { view } => {
            print_outcome(&controller, view);
            Ok(())
        }
        Command::Transcript(cmd) => run_transcript(&controller, cmd.command).await,
        Command::Icebreaker(cmd) => run_icebreaker(&controller, cmd.command).await,
    }
}

async fn run_transcript(
    controller: &SyncController<HttpResourceClient>,
    command: TranscriptSubcommand,
) -> Result<(), CliError> {
    let dispatch = match command {
        TranscriptSubcommand::Create(args) => {
            let transcript = read_text("transcript", args.transcript, args.transcript_file.as_deref())?;
            controller.set_field::<Transcripts>(TranscriptField::CompanyName, args.company_name);
            controller.set_field::<Transcripts>(TranscriptField::Attendees, args.attendees);
            controller.set_field::<Transcripts>(TranscriptField::Date, args.date);
            controller.set_field::<Transcripts>(TranscriptField::Transcript, transcript);
            controller.set_field::<Transcripts>(TranscriptField::CustomPrompt, args.custom_prompt);
            controller.submit_create::<Transcripts>().await
        }
        TranscriptSubcommand::Delete { id } => controller.submit_delete::<Transcripts>(id).await,
    };
    finish(controller, dispatch, View::Transcripts)
}

async fn run_icebreaker(
    controller: &SyncController<HttpResourceClient>,
    command: IcebreakerSubcommand,
) -> Result<(), CliError> {
    let dispatch = match command {
        IcebreakerSubcommand::Create(args) => {
            let linkedin_bio = read_text("linkedin_bio", args.linkedin_bio, args.linkedin_bio_file.as_deref())?;
            let pitch_deck = read_text("pitch_deck", args.pitch_deck, args.pitch_deck_file.as_deref())?;
            let custom_prompt = if args.suggested_prompt {
                suggested_prompt(&args.company_name, &args.role_level)
            } else {
                args.custom_prompt
            };
            controller.set_field::<Icebreakers>(IcebreakerField::ProspectName, args.prospect_name);
            controller.set_field::<Icebreakers>(IcebreakerField::CompanyName, args.company_name);
            controller.set_field::<Icebreakers>(IcebreakerField::LinkedinBio, linkedin_bio);
            controller.set_field::<Icebreakers>(IcebreakerField::PitchDeck, pitch_deck);
            controller.set_field::<Icebreakers>(IcebreakerField::RoleLevel, args.role_level);
            controller.set_field::<Icebreakers>(IcebreakerField::CustomPrompt, custom_prompt);
            controller.submit_create::<Icebreakers>().await
        }
        IcebreakerSubcommand::Delete { id } => controller.submit_delete::<Icebreakers>(id).await,
    };
    finish(controller, dispatch, View::Icebreakers)
}

fn finish(
    controller: &SyncController<HttpResourceClient>,
    dispatch: Dispatch,
    view: View,
) -> Result<(), CliError> {
    let status = print_outcome(controller, view);
    match dispatch {
        Dispatch::Applied => Ok(()),
        Dispatch::Failed => Err(CliError::Failed(status.text().unwrap_or_default().to_owned())),
        Dispatch::AlreadyInFlight => Err(CliError::Failed("operation already in flight".to_owned())),
    }
}

/// Print the status slot and `view`, returning the status that was shown.
fn print_outcome(controller: &SyncController<HttpResourceClient>, view: View) -> StatusMessage {
    let snapshot = FeedSnapshot::capture(controller);
    if let Some(line) = render::status_line(&snapshot.status) {
        println!("{line}\n");
    }
    print!("{}", render::render_view(&snapshot, view));
    snapshot.status
}

/// Inline text wins; otherwise read `path`, with `-` meaning stdin.
fn read_text(field: &'static str, inline: Option<String>, path: Option<&str>) -> Result<String, CliError> {
    if let Some(text) = inline {
        return Ok(text);
    }
    let Some(path) = path else {
        return Ok(String::new());
    };
    let read_error = |source| CliError::ReadInput { field, path: path.to_owned(), source };
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}
