use clap::{Parser, Subcommand};
use rootfind_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rootfind")]
#[command(about = "Bounded integer square root checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load configuration from this file instead of the default path
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether each number has an integer square root
    Check {
        /// Numbers to check, in order
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// List every perfect square within the bound
    Squares {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Override the configured search bound
    #[arg(long, allow_negative_numbers = true)]
    bound: Option<i64>,

    /// Print one JSON object per line instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    rootfind_core::logging::init(cli.verbose);

    match cli.command {
        Commands::Check { numbers, search } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_check(&numbers, &search, &config)
        }
        Commands::Squares { search } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_squares(&search, &config)
        }
        Commands::InitConfig { force } => cmd_init_config(cli.config, force),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Resolve bound and output format from flags, falling back to config
fn resolve(search: &SearchArgs, config: &Config) -> Result<(SearchBound, OutputFormat)> {
    let bound = match search.bound {
        Some(value) => SearchBound::new(value)?,
        None => config.search.bound()?,
    };

    let format = if search.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    Ok((bound, format))
}

fn cmd_check(numbers: &[i64], search: &SearchArgs, config: &Config) -> Result<()> {
    let (bound, format) = resolve(search, config)?;
    tracing::debug!("Checking {} number(s) within 1..={}", numbers.len(), bound);

    for &number in numbers {
        // Root finder failures are reported per number, never fatal
        let result = find_integer_square_root_within(number, bound).map_err(Error::from);
        emit(&result, format)?;
    }

    Ok(())
}

fn cmd_squares(search: &SearchArgs, config: &Config) -> Result<()> {
    let (bound, format) = resolve(search, config)?;

    let squares = perfect_squares_within(bound);
    tracing::debug!("Found {} perfect squares within 1..={}", squares.len(), bound);

    for found in squares {
        emit(&Ok(found), format)?;
    }

    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(Config::default_config_path);

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn emit(result: &Result<SquareRoot>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", describe(result)),
        OutputFormat::Json => {
            let line = serde_json::to_string(&Outcome::from_result(result))?;
            println!("{}", line);
        }
    }
    Ok(())
}
