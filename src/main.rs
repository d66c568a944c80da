use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use parcel_routing::config::PlannerConfig;
use parcel_routing::generate::{create_parcels, random_point, random_points, Bounds};
use parcel_routing::io::{load_parcels, save_parcels};
use parcel_routing::job::PlanJob;
use parcel_routing::models::{random_max_distances, total_units, Point};
use parcel_routing::planner::Planner;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random customers and write them to a parcel file
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Plan delivery routes for a parcel file
    Plan(PlanArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of customer locations
    #[arg(short, long, default_value_t = 5)]
    points: usize,

    /// Side of the square area points are drawn from
    #[arg(long, default_value_t = 100.0)]
    area: f64,

    #[arg(short, long, default_value = "parcel_info.txt")]
    output: PathBuf,

    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct PlanArgs {
    /// Parcel file to plan for
    #[arg(short, long, default_value = "parcel_info.txt")]
    parcels: PathBuf,

    #[arg(long, default_value_t = 0.0)]
    depot_x: f64,

    #[arg(long, default_value_t = 0.0)]
    depot_y: f64,

    /// Draw the depot at random instead of using --depot-x/--depot-y
    #[arg(long)]
    random_depot: bool,

    /// Side of the square area a random depot is drawn from
    #[arg(long, default_value_t = 100.0)]
    area: f64,

    /// Number of delivery agents
    #[arg(short, long, default_value_t = 2)]
    agents: usize,

    /// Parcels each agent carries per trip
    #[arg(short, long, default_value_t = 10)]
    capacity: u32,

    /// Lower bound for randomly drawn agent range limits
    #[arg(long, default_value_t = 0.0)]
    min_distance: f64,

    /// Upper bound for randomly drawn agent range limits
    #[arg(long, default_value_t = 200.0)]
    max_distance: f64,

    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON planner config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn generate(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let mut rng = rng_from(args.seed);
    let bounds = Bounds::square(args.area)?;
    let points = random_points(&mut rng, args.points, &bounds);
    let parcels = create_parcels(&mut rng, args.points, &points);
    save_parcels(&args.output, &parcels)?;
    info!(
        customers = parcels.len(),
        total_parcels = total_units(&parcels),
        output = %args.output.display(),
        "generated parcel file"
    );
    Ok(())
}

fn plan(args: PlanArgs) -> Result<(), anyhow::Error> {
    let config = match &args.config {
        Some(path) => PlannerConfig::from_file(path)?,
        None => PlannerConfig::default(),
    };
    let mut rng = rng_from(args.seed);

    let parcels = load_parcels(&args.parcels)?;
    let depot = if args.random_depot {
        random_point(&mut rng, &Bounds::square(args.area)?)
    } else {
        Point::new(args.depot_x, args.depot_y)
    };
    info!(x = depot.x(), y = depot.y(), "depot location");
    let mut planner = Planner::new(depot, parcels, args.agents, args.capacity, config)?;

    let max_distances =
        random_max_distances(&mut rng, args.agents, args.min_distance, args.max_distance)?;
    info!(?max_distances, "drew agent range limits");
    planner.set_max_distances(&max_distances)?;

    let job = PlanJob::spawn(planner);
    let completed = job.wait(POLL_INTERVAL, || info!("generating routes..."))?;

    print!("{}", completed.planner.ledger(&completed.solution));

    let solution = &completed.solution;
    if solution.is_complete() {
        info!(
            delivered = solution.total_delivered(),
            distance = solution.total_distance(),
            "route generation complete"
        );
    } else {
        warn!(
            undelivered = solution.undelivered_units(),
            unassigned = ?solution.unassigned(),
            "some parcels could not be delivered; try a larger max distance or more agents"
        );
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Generate(args) => generate(args)?,
        Commands::Plan(args) => plan(args)?,
    }

    Ok(())
}
