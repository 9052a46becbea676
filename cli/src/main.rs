use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use formaboard::error::ApiError;
use formaboard::export::{ExportError, ExportFormat, ExportOptions, export_data};
use formaboard::net::api::ApiClient;
use formaboard::net::logout::LogoutHook;
use formaboard::net::token_store::TokenStore;
use formaboard::net::types::Page;
use formaboard::resources::{
    appairage, atelier_tre, candidat, choices, commentaire, document, formation, partenaire,
    prospection, search, user,
};
use formaboard::state::auth::SessionController;
use formaboard::state::list::{FilterValue, HasId, ListQuery, ListState};
use formaboard::util::prefs::{Preferences, ThemeMode};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("unsupported export format: {0}")]
    ExportFormat(String),
    #[error("invalid filter `{0}`; expected key=value")]
    InvalidFilter(String),
    #[error("invalid theme `{0}`; expected light, dark or toggle")]
    InvalidTheme(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cannot read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("not signed in; run `forma-cli login` first")]
    NotSignedIn,
}

#[derive(Parser, Debug)]
#[command(name = "forma-cli", about = "Formaboard administration CLI")]
struct Cli {
    #[arg(long, env = "FORMA_BASE_URL", default_value = "http://127.0.0.1:8000/api")]
    base_url: String,

    #[arg(long, env = "FORMA_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the token pair.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted token pair.
    Logout,
    /// Show the profile behind the stored token.
    Whoami,
    /// Create an account (public endpoint).
    Register(RegisterArgs),
    /// Search every resource type at once.
    Search { q: String },
    /// Show or change the persisted UI theme.
    Theme {
        /// `light`, `dark` or `toggle`; omit to print the current theme.
        mode: Option<String>,
    },
    Formation(FormationCommand),
    Candidat(CandidatCommand),
    Partenaire(PartenaireCommand),
    Prospection(ProspectionCommand),
    Commentaire(CommentaireCommand),
    Document(DocumentCommand),
    Appairage(AppairageCommand),
    AtelierTre(AtelierTreCommand),
    User(UserCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
}

#[derive(Args, Clone, Debug)]
struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 10)]
    page_size: u32,

    #[arg(long)]
    ordering: Option<String>,

    /// Repeatable resource-specific filter, e.g. `--filter centre=3`.
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<String>,
}

#[derive(Args, Debug)]
struct FormationCommand {
    #[command(subcommand)]
    command: FormationSubcommand,
}

#[derive(Subcommand, Debug)]
enum FormationSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    /// Available filter values for the list screen.
    Filtres,
    /// Centre/statut/type-offre reference lists for the formation form.
    Choices,
    Commentaires {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Documents {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Evenements {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Prospections {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Partenaires {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Historique {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Args, Debug)]
struct CandidatCommand {
    #[command(subcommand)]
    command: CandidatSubcommand,
}

#[derive(Subcommand, Debug)]
enum CandidatSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Meta,
}

#[derive(Args, Debug)]
struct PartenaireCommand {
    #[command(subcommand)]
    command: PartenaireSubcommand,
}

#[derive(Subcommand, Debug)]
enum PartenaireSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Meta,
}

#[derive(Args, Debug)]
struct ProspectionCommand {
    #[command(subcommand)]
    command: ProspectionSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProspectionSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    /// Move a prospection to a new status.
    ChangerStatut {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Status history of one prospection.
    Historiques {
        id: i64,
        #[command(flatten)]
        args: ListArgs,
    },
    Choices,
}

#[derive(Args, Debug)]
struct CommentaireCommand {
    #[command(subcommand)]
    command: CommentaireSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentaireSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Meta,
    /// Export commentaires grouped by date to csv, pdf or word.
    Export {
        #[arg(long, default_value = "csv")]
        format: String,

        /// Restrict to one formation.
        #[arg(long)]
        formation: Option<i64>,

        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Output name without extension.
        #[arg(long, default_value = "export-commentaires")]
        filename: String,

        /// How many rows to pull for the export.
        #[arg(long, default_value_t = 500)]
        limit: u32,
    },
}

#[derive(Args, Debug)]
struct DocumentCommand {
    #[command(subcommand)]
    command: DocumentSubcommand,
}

#[derive(Subcommand, Debug)]
enum DocumentSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    /// Upload a file; `--data` carries the metadata JSON.
    Create {
        #[arg(long)]
        data: String,
        #[arg(long)]
        file: PathBuf,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
        #[arg(long)]
        file: PathBuf,
    },
    Delete {
        id: i64,
    },
    Meta,
}

#[derive(Args, Debug)]
struct AppairageCommand {
    #[command(subcommand)]
    command: AppairageSubcommand,
}

#[derive(Subcommand, Debug)]
enum AppairageSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Meta,
}

#[derive(Args, Debug)]
struct AtelierTreCommand {
    #[command(subcommand)]
    command: AtelierTreSubcommand,
}

#[derive(Subcommand, Debug)]
enum AtelierTreSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    /// Enroll a candidate in a workshop.
    AddParticipation {
        #[arg(long)]
        data: String,
    },
    Meta,
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Roles,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let tokens = TokenStore::new(cli.token_file.clone().unwrap_or_else(TokenStore::default_path));
    let hook = LogoutHook::new();
    let api = ApiClient::new(&cli.base_url, tokens, hook.clone())?;
    let session = SessionController::new(api.clone(), &hook);

    let outcome = run(&cli.command, &api, &session).await;
    if let Some(notice) = session.take_notice() {
        eprintln!("{notice}");
    }
    outcome
}

async fn run(command: &Command, api: &ApiClient, session: &SessionController) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let profile = session.login(email, password).await?;
            eprintln!("signed in as {}", profile.display_name());
            Ok(())
        }
        Command::Logout => {
            session.logout().await;
            Ok(())
        }
        Command::Whoami => {
            session.restore().await;
            match session.snapshot().user {
                Some(profile) => print_json(&profile),
                None => Err(CliError::NotSignedIn),
            }
        }
        Command::Register(args) => {
            let payload = user::RegistrationPayload {
                email: args.email.clone(),
                username: args.username.clone(),
                password: args.password.clone(),
                first_name: args.first_name.clone(),
                last_name: args.last_name.clone(),
            };
            print_json(&user::register(api, &payload).await?)
        }
        Command::Search { q } => print_json(&search::global(api, q).await?),
        Command::Theme { mode } => run_theme(mode.as_deref()),
        Command::Formation(cmd) => run_formation(api, cmd).await,
        Command::Candidat(cmd) => run_candidat(api, cmd).await,
        Command::Partenaire(cmd) => run_partenaire(api, cmd).await,
        Command::Prospection(cmd) => run_prospection(api, cmd).await,
        Command::Commentaire(cmd) => run_commentaire(api, cmd).await,
        Command::Document(cmd) => run_document(api, cmd).await,
        Command::Appairage(cmd) => run_appairage(api, cmd).await,
        Command::AtelierTre(cmd) => run_atelier_tre(api, cmd).await,
        Command::User(cmd) => run_user(api, cmd).await,
    }
}

fn run_theme(mode: Option<&str>) -> Result<(), CliError> {
    let prefs = Preferences::new(Preferences::default_path());
    match mode {
        None => {}
        Some("toggle") => prefs.set_theme(prefs.theme().toggled()),
        Some("dark") => prefs.set_theme(ThemeMode::Dark),
        Some("light") => prefs.set_theme(ThemeMode::Light),
        Some(other) => return Err(CliError::InvalidTheme(other.to_owned())),
    }
    println!("{}", prefs.theme().as_str());
    Ok(())
}

async fn run_formation(api: &ApiClient, cmd: &FormationCommand) -> Result<(), CliError> {
    match &cmd.command {
        FormationSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<formation::Formation>(args)?;
            finish_list(list, seq, formation::list(api, &query).await)
        }
        FormationSubcommand::Get { id } => print_json(&formation::get(api, *id).await?),
        FormationSubcommand::Create { data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&formation::create(api, &payload).await?)
        }
        FormationSubcommand::Update { id, data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&formation::update(api, *id, &payload).await?)
        }
        FormationSubcommand::Delete { id } => {
            formation::delete(api, *id).await?;
            eprintln!("deleted formation {id}");
            Ok(())
        }
        FormationSubcommand::Filtres => print_json(&formation::filtres(api).await?),
        FormationSubcommand::Choices => {
            let (centres, statuts, type_offres) = choices::formation_choices(api).await?;
            print_json(&serde_json::json!({
                "centres": centres,
                "statuts": statuts,
                "type_offres": type_offres,
            }))
        }
        FormationSubcommand::Commentaires { id, args } => {
            let (list, seq, query) = prepare_list::<commentaire::Commentaire>(args)?;
            finish_list(list, seq, formation::commentaires(api, *id, &query).await)
        }
        FormationSubcommand::Documents { id, args } => {
            let (list, seq, query) = prepare_list::<document::Document>(args)?;
            finish_list(list, seq, formation::documents(api, *id, &query).await)
        }
        FormationSubcommand::Evenements { id, args } => {
            let (list, seq, query) = prepare_list::<formation::Evenement>(args)?;
            finish_list(list, seq, formation::evenements(api, *id, &query).await)
        }
        FormationSubcommand::Prospections { id, args } => {
            let (list, seq, query) = prepare_list::<prospection::Prospection>(args)?;
            finish_list(list, seq, formation::prospections(api, *id, &query).await)
        }
        FormationSubcommand::Partenaires { id, args } => {
            let (list, seq, query) = prepare_list::<partenaire::Partenaire>(args)?;
            finish_list(list, seq, formation::partenaires(api, *id, &query).await)
        }
        FormationSubcommand::Historique { id, args } => {
            let (list, seq, query) = prepare_list::<formation::HistoriqueFormation>(args)?;
            finish_list(list, seq, formation::historique(api, *id, &query).await)
        }
    }
}

async fn run_candidat(api: &ApiClient, cmd: &CandidatCommand) -> Result<(), CliError> {
    match &cmd.command {
        CandidatSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<candidat::Candidat>(args)?;
            finish_list(list, seq, candidat::list(api, &query).await)
        }
        CandidatSubcommand::Get { id } => print_json(&candidat::get(api, *id).await?),
        CandidatSubcommand::Create { data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&candidat::create(api, &payload).await?)
        }
        CandidatSubcommand::Update { id, data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&candidat::update(api, *id, &payload).await?)
        }
        CandidatSubcommand::Delete { id } => {
            candidat::delete(api, *id).await?;
            eprintln!("deleted candidat {id}");
            Ok(())
        }
        CandidatSubcommand::Meta => print_json(&candidat::meta(api).await?),
    }
}

async fn run_partenaire(api: &ApiClient, cmd: &PartenaireCommand) -> Result<(), CliError> {
    match &cmd.command {
        PartenaireSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<partenaire::Partenaire>(args)?;
            finish_list(list, seq, partenaire::list(api, &query).await)
        }
        PartenaireSubcommand::Get { id } => print_json(&partenaire::get(api, *id).await?),
        PartenaireSubcommand::Create { data } => {
            let payload: partenaire::PartenairePayload = serde_json::from_str(data)?;
            print_json(&partenaire::create(api, &payload).await?)
        }
        PartenaireSubcommand::Update { id, data } => {
            let payload: partenaire::PartenairePayload = serde_json::from_str(data)?;
            print_json(&partenaire::update(api, *id, &payload).await?)
        }
        PartenaireSubcommand::Delete { id } => {
            partenaire::delete(api, *id).await?;
            eprintln!("deleted partenaire {id}");
            Ok(())
        }
        PartenaireSubcommand::Meta => print_json(&partenaire::meta(api).await?),
    }
}

async fn run_prospection(api: &ApiClient, cmd: &ProspectionCommand) -> Result<(), CliError> {
    match &cmd.command {
        ProspectionSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<prospection::Prospection>(args)?;
            finish_list(list, seq, prospection::list(api, &query).await)
        }
        ProspectionSubcommand::Get { id } => print_json(&prospection::get(api, *id).await?),
        ProspectionSubcommand::Create { data } => {
            let payload: prospection::ProspectionPayload = serde_json::from_str(data)?;
            print_json(&prospection::create(api, &payload).await?)
        }
        ProspectionSubcommand::Update { id, data } => {
            let payload: prospection::ProspectionPayload = serde_json::from_str(data)?;
            print_json(&prospection::update(api, *id, &payload).await?)
        }
        ProspectionSubcommand::Delete { id } => {
            prospection::delete(api, *id).await?;
            eprintln!("deleted prospection {id}");
            Ok(())
        }
        ProspectionSubcommand::ChangerStatut { id, data } => {
            let payload: prospection::ChangerStatutPayload = serde_json::from_str(data)?;
            print_json(&prospection::changer_statut(api, *id, &payload).await?)
        }
        ProspectionSubcommand::Historiques { id, args } => {
            let (list, seq, query) = prepare_list::<prospection::HistoriqueProspection>(args)?;
            finish_list(list, seq, prospection::historiques(api, *id, &query).await)
        }
        ProspectionSubcommand::Choices => print_json(&prospection::choices(api).await?),
    }
}

async fn run_commentaire(api: &ApiClient, cmd: &CommentaireCommand) -> Result<(), CliError> {
    match &cmd.command {
        CommentaireSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<commentaire::Commentaire>(args)?;
            finish_list(list, seq, commentaire::list(api, &query).await)
        }
        CommentaireSubcommand::Get { id } => print_json(&commentaire::get(api, *id).await?),
        CommentaireSubcommand::Create { data } => {
            let payload: commentaire::CommentairePayload = serde_json::from_str(data)?;
            print_json(&commentaire::create(api, &payload).await?)
        }
        CommentaireSubcommand::Update { id, data } => {
            let payload: commentaire::CommentairePayload = serde_json::from_str(data)?;
            print_json(&commentaire::update(api, *id, &payload).await?)
        }
        CommentaireSubcommand::Delete { id } => {
            commentaire::delete(api, *id).await?;
            eprintln!("deleted commentaire {id}");
            Ok(())
        }
        CommentaireSubcommand::Meta => print_json(&commentaire::meta(api).await?),
        CommentaireSubcommand::Export { format, formation, out_dir, filename, limit } => {
            run_commentaire_export(api, format, *formation, out_dir, filename, *limit).await
        }
    }
}

async fn run_commentaire_export(
    api: &ApiClient,
    format: &str,
    formation_id: Option<i64>,
    out_dir: &std::path::Path,
    filename: &str,
    limit: u32,
) -> Result<(), CliError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|_| CliError::ExportFormat(format.to_owned()))?;

    let mut list: ListState<commentaire::Commentaire> = ListState::with_page_size(limit);
    if let Some(id) = formation_id {
        list.set_filter("formation", FilterValue::Number(id));
    }
    list.set_ordering(Some("-date".to_owned()));
    let (seq, query) = list.begin_fetch();
    let page = commentaire::list(api, &query).await?;
    list.apply_page(seq, page);

    let options = ExportOptions {
        title: "Export des commentaires".to_owned(),
        headers: commentaire::EXPORT_HEADERS.iter().map(|h| (*h).to_owned()).collect(),
        filename: filename.to_owned(),
    };
    match export_data(format, &options, list.items(), out_dir) {
        Ok(path) => {
            eprintln!("wrote {}", path.display());
            Ok(())
        }
        Err(ExportError::Empty) => {
            eprintln!("no commentaires match; nothing exported");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

async fn run_document(api: &ApiClient, cmd: &DocumentCommand) -> Result<(), CliError> {
    match &cmd.command {
        DocumentSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<document::Document>(args)?;
            finish_list(list, seq, document::list(api, &query).await)
        }
        DocumentSubcommand::Get { id } => print_json(&document::get(api, *id).await?),
        DocumentSubcommand::Create { data, file } => {
            let payload: document::DocumentPayload = serde_json::from_str(data)?;
            let (name, bytes) = read_upload(file)?;
            print_json(&document::create(api, &payload, &name, bytes).await?)
        }
        DocumentSubcommand::Update { id, data, file } => {
            let payload: document::DocumentPayload = serde_json::from_str(data)?;
            let (name, bytes) = read_upload(file)?;
            print_json(&document::update(api, *id, &payload, &name, bytes).await?)
        }
        DocumentSubcommand::Delete { id } => {
            document::delete(api, *id).await?;
            eprintln!("deleted document {id}");
            Ok(())
        }
        DocumentSubcommand::Meta => print_json(&document::meta(api).await?),
    }
}

async fn run_appairage(api: &ApiClient, cmd: &AppairageCommand) -> Result<(), CliError> {
    match &cmd.command {
        AppairageSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<appairage::Appairage>(args)?;
            finish_list(list, seq, appairage::list(api, &query).await)
        }
        AppairageSubcommand::Get { id } => print_json(&appairage::get(api, *id).await?),
        AppairageSubcommand::Create { data } => {
            let payload: appairage::AppairagePayload = serde_json::from_str(data)?;
            print_json(&appairage::create(api, &payload).await?)
        }
        AppairageSubcommand::Update { id, data } => {
            let payload: appairage::AppairagePayload = serde_json::from_str(data)?;
            print_json(&appairage::update(api, *id, &payload).await?)
        }
        AppairageSubcommand::Delete { id } => {
            appairage::delete(api, *id).await?;
            eprintln!("deleted appairage {id}");
            Ok(())
        }
        AppairageSubcommand::Meta => print_json(&appairage::meta(api).await?),
    }
}

async fn run_atelier_tre(api: &ApiClient, cmd: &AtelierTreCommand) -> Result<(), CliError> {
    match &cmd.command {
        AtelierTreSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<atelier_tre::AtelierTre>(args)?;
            finish_list(list, seq, atelier_tre::list(api, &query).await)
        }
        AtelierTreSubcommand::Get { id } => print_json(&atelier_tre::get(api, *id).await?),
        AtelierTreSubcommand::Create { data } => {
            let payload: atelier_tre::AtelierTrePayload = serde_json::from_str(data)?;
            print_json(&atelier_tre::create(api, &payload).await?)
        }
        AtelierTreSubcommand::Update { id, data } => {
            let payload: atelier_tre::AtelierTrePayload = serde_json::from_str(data)?;
            print_json(&atelier_tre::update(api, *id, &payload).await?)
        }
        AtelierTreSubcommand::Delete { id } => {
            atelier_tre::delete(api, *id).await?;
            eprintln!("deleted atelier {id}");
            Ok(())
        }
        AtelierTreSubcommand::AddParticipation { data } => {
            let payload: atelier_tre::ParticipationPayload = serde_json::from_str(data)?;
            print_json(&atelier_tre::add_participation(api, &payload).await?)
        }
        AtelierTreSubcommand::Meta => print_json(&atelier_tre::meta(api).await?),
    }
}

async fn run_user(api: &ApiClient, cmd: &UserCommand) -> Result<(), CliError> {
    match &cmd.command {
        UserSubcommand::List(args) => {
            let (list, seq, query) = prepare_list::<formaboard::net::types::User>(args)?;
            finish_list(list, seq, user::list(api, &query).await)
        }
        UserSubcommand::Get { id } => print_json(&user::get(api, *id).await?),
        UserSubcommand::Create { data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&user::create(api, &payload).await?)
        }
        UserSubcommand::Update { id, data } => {
            let payload: Value = serde_json::from_str(data)?;
            print_json(&user::update(api, *id, &payload).await?)
        }
        UserSubcommand::Delete { id } => {
            user::delete(api, *id).await?;
            eprintln!("deleted user {id}");
            Ok(())
        }
        UserSubcommand::Roles => print_json(&user::roles(api).await?),
    }
}

/// Fold the common list flags into a [`ListState`] and snapshot its query.
fn prepare_list<T: HasId>(args: &ListArgs) -> Result<(ListState<T>, u64, ListQuery), CliError> {
    let mut list: ListState<T> = ListState::with_page_size(args.page_size);
    list.set_search(args.search.clone());
    list.set_ordering(args.ordering.clone());
    for raw in &args.filters {
        let (key, value) = parse_filter(raw)?;
        list.set_filter(key, value);
    }
    // Page last: every other mutator rewinds it to 1.
    list.set_page(args.page);
    let (seq, query) = list.begin_fetch();
    Ok((list, seq, query))
}

/// Apply the response and print the page, or surface the error.
fn finish_list<T: HasId + Serialize>(
    mut list: ListState<T>,
    seq: u64,
    result: Result<Page<T>, ApiError>,
) -> Result<(), CliError> {
    match result {
        Ok(page) => {
            list.apply_page(seq, page);
            print_json(&list.items())?;
            eprintln!(
                "page {}/{} ({} total)",
                list.query().page,
                list.total_pages().max(1),
                list.total()
            );
            Ok(())
        }
        Err(error) => {
            list.apply_error(seq, error.user_message());
            Err(error.into())
        }
    }
}

/// Parse a `key=value` filter flag; numbers and booleans get typed values.
fn parse_filter(raw: &str) -> Result<(String, FilterValue), CliError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(CliError::InvalidFilter(raw.to_owned()));
    };
    if key.is_empty() || value.is_empty() {
        return Err(CliError::InvalidFilter(raw.to_owned()));
    }
    let value = if let Ok(number) = value.parse::<i64>() {
        FilterValue::Number(number)
    } else if let Ok(flag) = value.parse::<bool>() {
        FilterValue::Flag(flag)
    } else {
        FilterValue::Text(value.to_owned())
    };
    Ok((key.to_owned(), value))
}

fn read_upload(path: &std::path::Path) -> Result<(String, Vec<u8>), CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.bin")
        .to_owned();
    Ok((name, bytes))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
