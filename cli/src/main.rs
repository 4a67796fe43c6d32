mod api;


use std::path::{Path, PathBuf};

use base64::Engine as _;
use clap::{Args, Parser, Subcommand};
use plans::capture::feedback_label;
use plans::chat::calendar_summary;
use plans::form::{FormFields, field, normalize_request};
use plans::login::validate_credentials;
use plans::settings::{SettingsBlob, facial_analysis_enabled, key, mask_secrets};
use plans::suggest::qualifying_query;
use plans::{FormError, LoginError, PlanView, StudyPlanResult};
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("login failed: {0}")]
    LoginRejected(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported image type `{0}`; use .jpg, .jpeg or .png")]
    UnsupportedImage(String),
    #[error("expected KEY=VALUE, got `{0}`")]
    InvalidAssignment(String),
}

#[derive(Parser, Debug)]
#[command(name = "studyplan", about = "Study planner API client")]
struct Cli {
    #[arg(long, env = "STUDYPLAN_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Validate credentials and log in.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STUDYPLAN_PASSWORD")]
        password: String,
    },
    /// Generate a study plan.
    Plan(PlanArgs),
    /// Topic suggestions for a partial query.
    Suggest { query: String },
    /// Currently trending study topics.
    Trending,
    /// Classify the facial expression in an image file.
    Analyze { image: PathBuf },
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    topic: String,
    /// Comma-separated learning goals.
    #[arg(long)]
    goals: Option<String>,
    /// Detail level from 1 to 5.
    #[arg(long)]
    depth: Option<String>,
    #[arg(long)]
    weeks: Option<String>,
    #[arg(long, default_value_t = false)]
    resources: bool,
    #[arg(long, default_value_t = false)]
    generate_goals: bool,
    #[arg(long)]
    learning_style: Option<String>,
    #[arg(long)]
    prior_knowledge: Option<String>,
    #[arg(long)]
    context: Option<String>,
    #[arg(long)]
    language: Option<String>,
    /// Print the server's JSON response as received.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl PlanArgs {
    /// Same field set the browser form submits.
    fn to_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push(field::TOPIC, self.topic.as_str());
        let optional = [
            (field::GOALS, &self.goals),
            (field::DEPTH_LEVEL, &self.depth),
            (field::DURATION_WEEKS, &self.weeks),
            (field::LEARNING_STYLE, &self.learning_style),
            (field::PRIOR_KNOWLEDGE, &self.prior_knowledge),
            (field::ADDITIONAL_CONTEXT, &self.context),
            (field::LANGUAGE, &self.language),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.push(name, value.as_str());
            }
        }
        fields.push_checkbox(field::INCLUDE_RESOURCES, self.resources);
        fields.push_checkbox(field::GENERATE_GOALS, self.generate_goals);
        fields
    }
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    /// Print stored settings with API keys masked.
    Get,
    /// Save `KEY=VALUE` pairs; empty values are skipped.
    Set {
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url)?;
    tracing::debug!(base_url = %cli.base_url, "starting");

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Login { email, password } => run_login(&api, &email, &password).await,
        Command::Plan(args) => run_plan(&api, args).await,
        Command::Suggest { query } => run_suggest(&api, &query).await,
        Command::Trending => run_trending(&api).await,
        Command::Analyze { image } => run_analyze(&api, &image).await,
        Command::Settings(settings) => run_settings(&api, settings).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_ping(api: &ApiClient) -> Result<(), CliError> {
    api.health().await?;
    println!("ok");
    Ok(())
}

async fn run_login(api: &ApiClient, email: &str, password: &str) -> Result<(), CliError> {
    let credentials = validate_credentials(email, password)?;
    let response = api.login(&credentials).await?;
    if !response.success {
        let message = response.message.unwrap_or_else(|| "unknown error".to_owned());
        return Err(CliError::LoginRejected(message));
    }
    println!("Login successful!");
    Ok(())
}

async fn run_plan(api: &ApiClient, args: PlanArgs) -> Result<(), CliError> {
    let request = normalize_request(&args.to_fields())?;
    tracing::info!(topic = %request.topic, "generating study plan");
    let body = api.generate_study_plan(&request).await?;
    print!("{}", render_plan(body, args.json)?);
    Ok(())
}

/// `--json` echoes the server's body untouched; otherwise the plan is rendered.
fn render_plan(body: serde_json::Value, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&body)?));
    }
    let result: StudyPlanResult = serde_json::from_value(body)?;
    let mut out = PlanView::from_result(&result).to_text();
    if let Some(summary) = result.calendar_events_info.as_ref().and_then(calendar_summary) {
        out.push_str(&format!("\n{summary}\n"));
    }
    Ok(out)
}

async fn run_suggest(api: &ApiClient, raw: &str) -> Result<(), CliError> {
    let Some(query) = qualifying_query(raw) else {
        tracing::info!("query too short; not asking for suggestions");
        return Ok(());
    };
    for suggestion in api.suggestions(query).await? {
        println!("{suggestion}");
    }
    Ok(())
}

async fn run_trending(api: &ApiClient) -> Result<(), CliError> {
    for topic in api.trending_topics().await? {
        println!("{topic}");
    }
    Ok(())
}

async fn run_analyze(api: &ApiClient, path: &Path) -> Result<(), CliError> {
    let mime = image_mime(path)?;
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let result = api.analyze_expression(data_url(mime, &bytes)).await?;
    println!("{}", feedback_label(&result));
    Ok(())
}

async fn run_settings(api: &ApiClient, settings: SettingsCommand) -> Result<(), CliError> {
    match settings.command {
        SettingsSubcommand::Get => {
            let blob = api.load_settings().await?;
            let masked = serde_json::Value::Object(mask_secrets(&blob));
            println!("{}", serde_json::to_string_pretty(&masked)?);
            Ok(())
        }
        SettingsSubcommand::Set { assignments } => {
            let fields = assignments
                .iter()
                .map(String::as_str)
                .map(parse_assignment)
                .collect::<Result<FormFields, _>>()?;
            if fields.non_empty_json().is_empty() {
                tracing::warn!("every value was empty; nothing to save");
                return Ok(());
            }
            let current = api.load_settings().await?;
            let payload = settings_payload(&fields, &current);
            api.save_settings(&payload).await?;
            println!("Settings saved successfully.");
            Ok(())
        }
    }
}

/// Body for `POST /settings`.
///
/// The server reads a missing facial-analysis flag as off, so an enabled flag
/// is carried over unless the assignments name it.
fn settings_payload(fields: &FormFields, current: &SettingsBlob) -> SettingsBlob {
    let mut payload = fields.non_empty_json();
    if fields.get(key::ENABLE_FACIAL_ANALYSIS).is_none() && facial_analysis_enabled(current) {
        payload.insert(
            key::ENABLE_FACIAL_ANALYSIS.to_owned(),
            serde_json::Value::from("true"),
        );
    }
    payload
}

/// Split `KEY=VALUE`; the value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidAssignment(raw.to_owned()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidAssignment(raw.to_owned()));
    }
    Ok((key.to_owned(), value.trim().to_owned()))
}

fn image_mime(path: &Path) -> Result<&'static str, CliError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        _ => Err(CliError::UnsupportedImage(ext)),
    }
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}
