use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vmp_landing::{config, content, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "vmp-landing")]
#[command(about = "Static landing page generator for VMP_Parser")]
#[command(long_about = "\
Static landing page generator for VMP_Parser

Renders a single self-contained HTML page: project title, a quick-start
transcript, and the six backend modules of the VMP_Parser Python app.
The page content is fixed; the source directory only supplies styling.

Source structure (all optional):

  content/
  ├── config.toml        # Output name, metadata, theme, colors
  └── assets/            # Copied verbatim to the output root

Run 'vmp-landing gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory holding config.toml and assets/
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the landing page and assets to the output directory
    Build {
        /// Rewrite the page even if the output is already up to date
        #[arg(long)]
        no_cache: bool,
    },
    /// Print the landing page to stdout without writing files
    Render {
        #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
    },
    /// Validate the source directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum RenderFormat {
    /// Full HTML document
    Html,
    /// Plain-text view for the terminal
    Text,
    /// Page data as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { no_cache } => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Generating {}", cli.output.display());
            let report = generate::generate(&cli.output, &cli.source, &site_config, !no_cache)?;
            output::print_generate_output(&report);
        }
        Command::Render { format } => {
            let landing = content::landing_page();
            match format {
                RenderFormat::Html => {
                    let site_config = config::load_config(&cli.source)?;
                    println!("{}", generate::render_html(&landing, &site_config));
                }
                RenderFormat::Text => output::print_page_text(&landing),
                RenderFormat::Json => println!("{}", serde_json::to_string_pretty(&landing)?),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config, &cli.source);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
