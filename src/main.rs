use clap::{Parser, Subcommand};
use post_index::{config, generate, output, scan};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "post-index")]
#[command(about = "Static navigation page for a directory of blog posts")]
#[command(long_about = "\
Static navigation page for a directory of blog posts

The posts directory is the data source. Every entry in it becomes a link on
a single page, below a fixed heading.

Content structure:

  ./
  ├── config.toml          # Site config (optional)
  └── pages/
      └── posts/           # Posts directory (configurable)
          ├── bowling.md   # → /posts/bowling
          └── fizzbuzz.md  # → /posts/fizzbuzz

Run 'post-index gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Source root (holds config.toml and the posts directory)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".post-index-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the posts directory into a manifest
    Scan,
    /// Produce the HTML page from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the source root without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let manifest_path = cli.temp_dir.join("manifest.json");

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let generated = generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&generated, &cli.output);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let generated = generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&generated, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
