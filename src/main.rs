//! quartic-ga command line runner
//!
//! The flags mirror the parameter form: every value is taken as text and goes through
//! the same parsing and validation a front end would use.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use quartic_ga::config::{Configuration, FormInput};
use quartic_ga::diagnostics::BestResult;
use quartic_ga::error::EvoResult;
use quartic_ga::observer::{GenerationRecord, NoopObserver, TraceRecorder};
use quartic_ga::run_with_rng;

#[derive(Parser)]
#[command(name = "quartic-ga", version, about = "Minimize (x - 2)^4 + (x - 2y)^2 with a genetic algorithm")]
struct Cli {
    /// Number of chromosomes per generation
    #[arg(long, default_value = "50", allow_hyphen_values = true)]
    chromosomes: String,

    /// Minimum gene value
    #[arg(long, default_value = "-50", allow_hyphen_values = true)]
    gene_min: String,

    /// Maximum gene value
    #[arg(long, default_value = "50", allow_hyphen_values = true)]
    gene_max: String,

    /// Number of generations
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    generations: String,

    /// Mutation probability in percent
    #[arg(long, default_value = "20", allow_hyphen_values = true)]
    mutation: String,

    /// Gene encoding (Integer or Float)
    #[arg(long, default_value = "Integer")]
    encoding: String,

    /// Parent selection method (Roulette or Tournament)
    #[arg(long, default_value = "Roulette")]
    selection: String,

    /// JSON configuration file; takes precedence over the form flags
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Print only the best result
    #[arg(long)]
    summary_only: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (result, records) = if cli.summary_only {
        (run_with_rng(config, &mut rng, &mut NoopObserver)?, Vec::new())
    } else {
        let mut recorder = TraceRecorder::new();
        let result = run_with_rng(config, &mut rng, &mut recorder)?;
        (result, recorder.into_records())
    };

    match cli.format {
        OutputFormat::Table => print_tables(&records, &result, cli.verbose > 0),
        OutputFormat::Json => print_json(&records, &result)?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> EvoResult<Configuration> {
    if let Some(path) = &cli.config {
        let document = fs::read_to_string(path).map_err(|e| {
            quartic_ga::error::ParseError::Document(format!("{}: {}", path.display(), e))
        })?;
        return Configuration::from_json(&document);
    }

    FormInput {
        chromosomes: cli.chromosomes.clone(),
        gene_min: cli.gene_min.clone(),
        gene_max: cli.gene_max.clone(),
        generations: cli.generations.clone(),
        mutation_percent: cli.mutation.clone(),
        encoding: cli.encoding.clone(),
        selection: cli.selection.clone(),
    }
    .parse()
}

fn print_tables(records: &[GenerationRecord], result: &BestResult, with_stats: bool) {
    for record in records {
        println!("Generation {}", record.generation + 1);
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["No.", "Result", "Gene 1", "Gene 2"]);
        for row in record.rows() {
            table.add_row(vec![
                row.index.to_string(),
                row.fitness.to_string(),
                row.gene1.to_string(),
                row.gene2.to_string(),
            ]);
        }
        println!("{table}\n");
    }
    println!("{}", summary_text(result, with_stats));
}

fn summary_text(result: &BestResult, with_stats: bool) -> String {
    if with_stats {
        format!("{}\n{}", result.summary(), result.stats.summary())
    } else {
        result.summary()
    }
}

fn print_json(
    records: &[GenerationRecord],
    result: &BestResult,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = serde_json::json!({
        "generations": records,
        "best": {
            "x": result.individual.x,
            "y": result.individual.y,
            "fitness": result.fitness,
            "generation": result.generation,
        },
        "stats": result.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
