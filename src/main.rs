use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalogue_server::cache::DEFAULT_FRESHNESS;
use catalogue_server::config::{AppConfig, CliConfig, FileConfig};
use catalogue_server::{
    load_catalog, run_server, CatalogCache, DirectorySource, RequestsLoggingLevel, ServerConfig,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the composer catalogues and the recordings database.
    #[clap(value_parser = parse_path)]
    pub data_dir: Option<PathBuf>,

    /// Optional TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// How long a loaded catalogue is served before being reloaded, in seconds.
    #[clap(long, default_value_t = DEFAULT_FRESHNESS.as_secs())]
    pub cache_freshness_sec: u64,

    /// Directory to be statically served under /static.
    #[clap(long, value_parser = parse_path)]
    pub assets_dir: Option<PathBuf>,

    /// Only load and check the catalogue, then exit.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_dir: self.data_dir.clone(),
            port: self.port,
            logging_level: self.logging_level.clone(),
            cache_freshness_sec: self.cache_freshness_sec,
            assets_dir: self.assets_dir.clone(),
        }
    }
}

fn check_catalogue(config: &AppConfig) -> Result<()> {
    let loaded = match load_catalog(&config.data_dir) {
        Ok(loaded) => loaded,
        Err(err) => {
            println!("The catalogue could not be loaded: {}", err);
            bail!("Catalogue check failed");
        }
    };

    if loaded.problems.is_empty() {
        println!("Catalogue checked, no issues found.");
    } else {
        println!("Found {} problems:", loaded.problems.len());
        for problem in loaded.problems.iter() {
            println!("- {}", problem);
        }
        println!();
        println!("Catalogue was built, but check the issues above.");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    if cli_args.check_only {
        return check_catalogue(&app_config);
    }

    let cache = Arc::new(CatalogCache::new(
        Box::new(DirectorySource::new(&app_config.data_dir)),
        app_config.cache_config(),
    ));
    info!("Loading catalogue from {:?}...", app_config.data_dir);
    if let Err(err) = cache.refresh() {
        error!("Initial catalogue load failed: {}", err);
        warn!("Starting with an empty catalogue, every request will retry the load.");
    }

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level.clone(),
        port: app_config.port,
        assets_dir: app_config.assets_dir.clone(),
        query: app_config.query.clone(),
    };

    info!("Ready to serve at port {}!", app_config.port);
    run_server(server_config, cache).await
}
