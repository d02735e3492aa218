use clap::{Parser, Subcommand};
use docpage_kit::layout::SidebarState;
use docpage_kit::types::{DocPage, NavItem};
use docpage_kit::{config, output, site};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docpage")]
#[command(about = "Render documentation pages with a collapsible navigation sidebar")]
#[command(long_about = "\
Render documentation pages with a collapsible navigation sidebar

Pages, navigation and child-page previews arrive as JSON produced by your
content pipeline. Each page.json is rendered to index.html in the matching
output directory.

Content structure:

  content/
  ├── config.toml                  # Site config (optional, cascades to children)
  ├── nav.json                     # Navigation tree (array of nav items)
  ├── page.json                    # Root page → dist/index.html
  ├── guide/
  │   ├── page.json                # → dist/guide/index.html
  │   ├── cover.png                # Copied as-is (preview card cover)
  │   └── install/
  │       └── page.json            # → dist/guide/install/index.html
  └── reference/
      ├── config.toml              # Overrides root config for this subtree
      └── page.json

Run 'docpage gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress at info level (otherwise RUST_LOG applies)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Page JSON file
    #[arg(long)]
    page: PathBuf,

    /// Navigation JSON file (array of nav items)
    #[arg(long)]
    nav: Option<PathBuf>,

    /// URL path of the page being rendered (defaults to root_url_path)
    #[arg(long)]
    current: Option<String>,

    /// Render the post-display state for this viewport width in pixels
    #[arg(long)]
    viewport_width: Option<u32>,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page in the content directory
    Build,
    /// Validate the content directory without writing anything
    Check,
    /// Render a single page to stdout
    Render(RenderArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let content = site::load_content(&cli.source)?;
            println!("==> Rendering → {}", cli.output.display());
            let report = site::build(&content, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = site::load_content(&cli.source)?;
            output::print_check_output(&content);
            println!("==> Content is valid");
        }
        Command::Render(args) => {
            let html = render_single(&cli.source, &args)?;
            println!("{html}");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Render one page outside a content tree. Config comes from the source
/// directory when it exists, stock defaults otherwise.
fn render_single(source: &Path, args: &RenderArgs) -> Result<String, Box<dyn std::error::Error>> {
    let site_config = if source.is_dir() {
        config::load_config(source)?
    } else {
        config::SiteConfig::default()
    };
    let page: DocPage = site::read_json(&args.page)?;
    let nav: Vec<NavItem> = match &args.nav {
        Some(path) => site::read_json(path)?,
        None => Vec::new(),
    };
    let current = args
        .current
        .clone()
        .unwrap_or_else(|| site_config.root_url_path.clone());
    let state = match args.viewport_width {
        Some(width) => SidebarState::mounted(width),
        None => SidebarState::new(),
    };
    tracing::info!(page = %args.page.display(), current = %current, "Rendering page");
    let html = site::render_page(&page, &nav, &site_config, &current, &state);
    Ok(html.into_string())
}
