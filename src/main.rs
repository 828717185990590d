use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use style_profile::commands::inspect::{self, OutputFormat};
use style_profile::commands::{export, learn};
use style_profile::config::{self, Settings};
use style_profile::report::Language;
use style_profile::store::ProfileStore;

#[derive(Parser)]
#[command(name = "style-profile", version, about = "Learn and inspect Korean/English writing-style profiles")]
struct Cli {
    /// Directory holding saved profiles (overrides config.yaml)
    #[arg(long, global = true)]
    profiles_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a profile from a file or directory, replacing any existing one
    Learn {
        /// A file (read whatever its extension) or a directory (top-level files
        /// with a configured extension)
        source: PathBuf,
        /// Profile name (defaults to config's default_profile)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Merge newly learned documents into an existing profile
    LearnAppend {
        /// A file (read whatever its extension) or a directory (top-level files
        /// with a configured extension)
        source: PathBuf,
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Analyze a single text (at least 50 characters) and print the profile JSON
    AnalyzeText { text: String },
    /// Print the style report of a profile
    Report {
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Print writing guidelines derived from a profile
    Guidelines {
        #[arg(short, long)]
        profile: Option<String>,
        /// korean or english
        #[arg(long, default_value = "korean")]
        language: String,
        /// email, report, proposal (or 이메일, 보고서, 제안서)
        #[arg(long)]
        doc_type: Option<String>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List saved profiles
    Profiles,
    /// Print a saved profile as stored
    Show { name: String },
    /// Write a Markdown style guide with archived samples
    Export {
        name: String,
        /// Output file (defaults to <profiles-dir>/<name>_style_guide.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "style_profile=debug" } else { "style_profile=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let env = config::RealEnv;
    let home = config::style_profile_home(&env);
    let settings = Settings::load(&env);
    let profiles_dir = cli
        .profiles_dir
        .unwrap_or_else(|| settings.profiles_path(&home));
    let store = ProfileStore::new(profiles_dir);

    let profile_name = |name: Option<String>| name.unwrap_or_else(|| settings.default_profile.clone());

    let output = match cli.command {
        Commands::Learn { source, profile } => {
            learn::learn(&store, &source, &profile_name(profile), &settings.extensions)?
        }
        Commands::LearnAppend { source, profile } => {
            learn::learn_append(&store, &source, &profile_name(profile), &settings.extensions)?
        }
        Commands::AnalyzeText { text } => inspect::analyze_text(&text)?,
        Commands::Report { profile } => inspect::report(&store, &profile_name(profile))?,
        Commands::Guidelines {
            profile,
            language,
            doc_type,
            format,
        } => {
            let language: Language = language.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            inspect::guidelines(
                &store,
                &profile_name(profile),
                language,
                doc_type.as_deref(),
                format,
            )?
        }
        Commands::Profiles => inspect::profiles(&store)?,
        Commands::Show { name } => inspect::show(&store, &name)?,
        Commands::Export { name, output } => export::export(&store, &name, output.as_deref())?,
    };

    println!("{output}");
    Ok(())
}
