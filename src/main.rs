//! Renders a page JSON file in the visitor's language.
//!
//! Usage: `portfolio-i18n <page.json> [--lang <tag>] [--out <path>]`

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::Parser;
use portfolio_i18n::config::ConfigManager;
use portfolio_i18n::i18n::system_locale;
use portfolio_i18n::site::{
    Site,
    SiteError,
    read_page,
    write_page,
};
use portfolio_i18n::storage::FileStorage;
use tracing_subscriber::EnvFilter;

/// Render a page JSON file in the visitor's language.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page JSON file; its directory is the site root
    page: PathBuf,

    /// Switch to this language after boot (e.g. `en`)
    #[arg(long)]
    lang: Option<String>,

    /// Output file (default: `<page>.rendered.json` next to the input)
    #[arg(long)]
    out: Option<PathBuf>,
}

/// `<stem>.rendered.json` next to `page`.
fn default_output(page: &Path) -> PathBuf {
    let stem = page.file_stem().map_or_else(|| "page".into(), |s| s.to_string_lossy());
    page.with_file_name(format!("{stem}.rendered.json"))
}

/// Boot the site for the page in `args` and write the result.
async fn run(args: Args) -> Result<PathBuf, SiteError> {
    let site_root = args
        .page
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let mut config = ConfigManager::new();
    config.load_settings(Some(site_root))?;
    let storage = FileStorage::new(config.resolve_path(&config.get_settings().preferences_file));

    let page = read_page(&args.page)?;
    let locale = system_locale();
    let mut site = Site::boot(&config, storage, locale.as_deref(), page).await?;
    if let Some(tag) = &args.lang {
        site.switch_language(tag).await;
    }

    let out = args.out.unwrap_or_else(|| default_output(&args.page));
    write_page(&out, site.page())?;
    Ok(out)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()).await {
        Ok(out) => {
            tracing::info!(path = ?out, "Wrote rendered page");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
