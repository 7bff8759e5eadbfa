use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use html::config::PageConfig;
use std::path::{Path, PathBuf};

mod demo;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "nview")]
#[command(about = "Render declarative pages and drive them through the event dispatcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize a page described in TOML and print the markup
    Render {
        /// Page config: metadata plus a `[[body]]` node tree
        path: PathBuf,
    },
    /// Run a scripted counter through the render state and print every render
    Demo {
        /// Number of scripted clicks on the increment button
        #[arg(long, default_value = "3")]
        clicks: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { path } => render(&path),
        Commands::Demo { clicks } => demo::run(clicks),
    }
}

fn render(path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let page: PageConfig =
        toml::from_str(&source).with_context(|| format!("failed to parse {}", path.display()))?;
    let (options, body) = page
        .into_document()
        .with_context(|| format!("invalid page config in {}", path.display()))?;
    log::info!("rendering {:?} from {}", options.page_name, path.display());
    println!("{}", html::serialize(&options, &body));
    Ok(())
}
