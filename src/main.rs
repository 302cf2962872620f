use clap::{Parser, Subcommand};
use pixelco::{config, generate, logging, output, serve};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup, called exactly once
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "pixelco")]
#[command(about = "Static site generator for the Pixel & Co agency website")]
#[command(long_about = "\
Static site generator for the Pixel & Co agency website

Pages, copy and imagery are compiled in. The project directory only holds an
optional site.toml that tunes palette, motion and the preview server.

Routes:

  /          Home      → index.html
  /about     About     → about/index.html
  /services  Services  → services/index.html
  /contact   Contact   → contact/index.html
  (other)    Not Found → 404.html

Run 'pixelco gen-config' to print a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory holding site.toml
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build {
        /// Ignore the write cache and rewrite every page
        #[arg(long)]
        force: bool,
    },
    /// Serve the site locally with live-rendered pages
    Serve {
        /// Address to bind (overrides serve.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides serve.port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List routes and their output files
    Routes,
    /// Validate site.toml and render every page without writing
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Build { force } => {
            let site_config = config::load_config(&cli.project)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site_config, &cli.output, !force)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Serve { host, port } => {
            let site_config = config::load_config(&cli.project)?;
            let host = host.unwrap_or_else(|| site_config.serve.host.clone());
            let port = port.unwrap_or(site_config.serve.port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve::serve(&site_config, &host, port))?;
        }
        Command::Routes => {
            output::print_routes();
        }
        Command::Check => {
            println!("==> Checking {}", cli.project.display());
            let site_config = config::load_config(&cli.project)?;
            let pages = generate::render_site(&site_config);
            output::print_check_output(&pages);
            println!("==> Site is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
