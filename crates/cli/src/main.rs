use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{InMemoryCatalog, MediumType, Scenario};
use engine::{DEFAULT_RECOMMENDATION_LIMIT, Priority, RecommendationResult, RequirementProfile};
use server::RecommendationOrchestrator;

/// netlink - Transmission medium recommendation engine
#[derive(Parser)]
#[command(name = "netlink")]
#[command(about = "Recommends transmission media for network link designs", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend media for a link design
    Recommend {
        /// Link length in km
        #[arg(long)]
        distance: f64,

        /// Required bandwidth in Mbps
        #[arg(long)]
        bandwidth: f64,

        /// Budget ceiling per km
        #[arg(long)]
        budget: f64,

        /// Deployment scenario (lan, wan, datacenter, campus, metro, long_haul)
        #[arg(long)]
        scenario: Scenario,

        /// Criteria to weight more heavily (cost, performance, reliability,
        /// ease_of_installation, maintenance); repeat or comma-separate
        #[arg(long = "priority", value_delimiter = ',', required = true)]
        priorities: Vec<Priority>,

        /// Minimum acceptable reliability rating (1-10)
        #[arg(long)]
        min_reliability: Option<f64>,

        /// Maximum acceptable end-to-end latency in ms
        #[arg(long)]
        max_latency: Option<f64>,

        /// Minimum acceptable environmental adaptability rating (1-10)
        #[arg(long)]
        min_environment: Option<f64>,

        /// Maximum acceptable installation difficulty rating (1-10)
        #[arg(long)]
        max_install_difficulty: Option<f64>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,

        /// Show advantages and considerations for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// List catalog records
    Catalog {
        /// Only show media rated for this scenario
        #[arg(long)]
        scenario: Option<Scenario>,

        /// Only show media of this type
        #[arg(long = "type")]
        medium_type: Option<MediumType>,
    },

    /// Show catalog statistics
    Stats,

    /// Run a recommendation throughput benchmark
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (small file, loads in milliseconds)
    let catalog = Arc::new(
        InMemoryCatalog::load_from_file(&cli.catalog)
            .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?,
    );

    match cli.command {
        Commands::Recommend {
            distance,
            bandwidth,
            budget,
            scenario,
            priorities,
            min_reliability,
            max_latency,
            min_environment,
            max_install_difficulty,
            limit,
            explain,
        } => {
            let profile = RequirementProfile {
                distance,
                required_bandwidth: bandwidth,
                budget_limit: budget,
                scenario,
                priorities,
                reliability_minimum: min_reliability,
                latency_maximum: max_latency,
                environmental_minimum: min_environment,
                installation_difficulty_maximum: max_install_difficulty,
            };
            handle_recommend(catalog, profile, limit, explain).await?
        }
        Commands::Catalog {
            scenario,
            medium_type,
        } => handle_catalog(catalog, scenario, medium_type)?,
        Commands::Stats => handle_stats(catalog)?,
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<InMemoryCatalog>,
    profile: RequirementProfile,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(catalog).with_limit(limit);

    let start = Instant::now();
    let response = orchestrator.recommend(profile).await?;
    let elapsed = start.elapsed();

    print_recommendations(&response.recommendations, explain);

    println!();
    println!("{}", response.summary.bold());
    println!("{}", format!("({elapsed:?})").dimmed());
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(
    catalog: Arc<InMemoryCatalog>,
    scenario: Option<Scenario>,
    medium_type: Option<MediumType>,
) -> Result<()> {
    println!("{}", "Catalog:".bold().blue());

    let records: Vec<&catalog::MediumRecord> = match scenario {
        Some(scenario) => catalog.find_by_scenario(scenario),
        None => catalog.all().iter().collect(),
    };

    for record in records
        .into_iter()
        .filter(|r| medium_type.is_none_or(|t| r.medium_type == t))
    {
        let status = if record.active {
            "active".green()
        } else {
            "inactive".red()
        };
        let scenarios = record
            .applicable_scenarios
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>3}. {} [{}] {} - {} Mbps up to {} km at {}/km [{}]",
            record.id,
            record.name.bold(),
            record.medium_type,
            status,
            record.max_bandwidth,
            record.max_distance,
            record.cost_per_km,
            scenarios
        );
        if let Some(specs) = &record.specifications {
            println!("     {}", specs.dimmed());
        }
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: Arc<InMemoryCatalog>) -> Result<()> {
    let stats = catalog.statistics();

    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Total records: {}", "• ".green(), stats.total);
    println!("{}Active records: {}", "• ".green(), stats.active);
    println!(
        "{}Average cost per km: {:.2}",
        "• ".green(),
        stats.average_cost_per_km
    );
    println!("By type:");
    for (medium_type, count) in &stats.type_distribution {
        println!("  - {medium_type}: {count}");
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<InMemoryCatalog>, requests: usize) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(catalog);

    const SCENARIOS: [Scenario; 6] = [
        Scenario::Lan,
        Scenario::Wan,
        Scenario::Datacenter,
        Scenario::Campus,
        Scenario::Metro,
        Scenario::LongHaul,
    ];

    // Generate randomized but valid profiles
    let profiles: Vec<RequirementProfile> = (0..requests)
        .map(|_| RequirementProfile {
            distance: (rand::random::<u32>() % 200 + 1) as f64,
            required_bandwidth: (rand::random::<u32>() % 10_000 + 100) as f64,
            budget_limit: (rand::random::<u32>() % 20_000 + 1_000) as f64,
            scenario: SCENARIOS[rand::random::<u32>() as usize % SCENARIOS.len()],
            priorities: vec![Priority::Cost, Priority::Performance],
            reliability_minimum: None,
            latency_maximum: None,
            environmental_minimum: None,
            installation_difficulty_maximum: None,
        })
        .collect();

    // Issue the requests concurrently
    let bench_start = Instant::now();
    let mut handles = vec![];
    for profile in profiles {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.recommend(profile).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = bench_start.elapsed();

    let avg_latency = timings.iter().sum::<std::time::Duration>() / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {total_time:?}");
    println!("Average latency: {avg_latency:?}");
    println!("P50 latency: {p50:?}");
    println!("P95 latency: {p95:?}");
    println!("P99 latency: {p99:?}");
    println!("Throughput: {throughput:.2} requests/second");

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[RecommendationResult], explain: bool) {
    println!("{}", "Recommended media:".bold().blue());

    if recommendations.is_empty() {
        println!("{}", "  (no medium matched the requirements)".dimmed());
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] - score {} - total cost {:.0}, yearly upkeep {:.0}",
            (rank + 1).to_string().green(),
            rec.media.name.bold(),
            rec.media.medium_type,
            rec.match_score,
            rec.total_cost,
            rec.annual_maintenance_cost
        );
        println!("   {}", rec.reason);
        if explain {
            for advantage in &rec.advantages {
                println!("   {} {}", "+".green(), advantage);
            }
            for consideration in &rec.considerations {
                println!("   {} {}", "-".yellow(), consideration);
            }
        }
    }
}
