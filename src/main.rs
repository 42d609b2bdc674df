use clap::{Parser, Subcommand};
use dharma_index::{config, consolidate, index, output, samples};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dharma-index")]
#[command(about = "Search index builder for a Markdown sutra archive")]
#[command(long_about = "\
Search index builder for a Markdown sutra archive

Numbered folders are chapters, front-matter carries titles and ordering,
and the result is one JSON index for the site's browse UI.

Document structure:

  docs/
  ├── config.toml                  # Optional, see 'gen-config'
  ├── index.md                     # → /
  ├── assets/                      # Never indexed; index written here
  ├── includes/                    # Never indexed
  ├── 01_birth/                    # Chapter 1, \"birth\"
  │   └── lumbini.md               # order: 1        → 01-00-001
  └── 05_turning/                  # Chapter 5, \"turning\"
      ├── index.md                 # → /05_turning/
      ├── intro.md                 # no order        → 05-00-999
      └── 12_dependent/            # Sub chapter 12
          └── links.md             # order: 1        → 05-12-001

Chapter resolution (first available wins):
  chapter:        front-matter → root chapter folder name → \"Uncategorized\"
  chapter_order:  front-matter → root chapter folder number → 999

Set RUST_LOG=info for per-file progress.")]
#[command(version)]
struct Cli {
    /// Document root directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the JSON index
    Build {
        /// Index file path, relative to --source (overrides index.output)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Index every document without writing the index file
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Write sample sutra articles into the document root
    Samples,
    /// Concatenate every document into a single Markdown file
    Consolidate {
        /// Output file, relative to --source (overrides consolidate.output)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build { output: index_path } => {
            let mut site_config = config::load_config(&cli.source)?;
            if let Some(path) = index_path {
                site_config.index.output = path;
            }
            println!("==> Indexing {}", cli.source.display());
            let report = index::build(&cli.source, &site_config)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let report = index::collect(&cli.source, &site_config);
            output::print_build_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Samples => {
            let site_config = config::load_config(&cli.source)?;
            let dir = cli.source.join(&site_config.samples.dir);
            println!("==> Writing samples to {}", dir.display());
            let written = samples::create_samples(&dir)?;
            output::print_samples_output(&written, &dir);
        }
        Command::Consolidate { output: target } => {
            let mut site_config = config::load_config(&cli.source)?;
            if let Some(path) = target {
                site_config.consolidate.output = path;
            }
            let target = site_config.consolidate_path(&cli.source);
            println!("==> Consolidating {}", cli.source.display());
            let included = consolidate::consolidate(&cli.source, &target, &site_config)?;
            output::print_consolidate_output(&included, &target);
        }
    }

    Ok(())
}
