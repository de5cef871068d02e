//! Skill Sorter - terminal driver
//!
//! Walks the two sorting rounds from stdin and prints a shareable link for
//! the result.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use skill_sorter::adapters::{BuiltinCatalog, InMemoryLocation, YamlCatalogFile};
use skill_sorter::application::{ControllerConfig, SessionView, ShareLink, SortingController};
use skill_sorter::config::{AppConfig, LoggingConfig};
use skill_sorter::domain::catalog::CatalogVariant;
use skill_sorter::domain::foundation::Timestamp;
use skill_sorter::domain::snapshot::SnapshotToken;
use skill_sorter::domain::sorting::{Choice, PressOutcome, Stage, VoteOutcome};
use skill_sorter::ports::CatalogSource;

/// Sort skills by what you enjoy and what you are good at
#[derive(Parser, Debug)]
#[command(name = "skill-sorter")]
#[command(about = "Two-round skill sorter with shareable results")]
struct Args {
    /// Address the session is opened from (defaults to share.base_url)
    #[arg(long)]
    url: Option<String>,

    /// Snapshot token to open instead of a fresh walk
    #[arg(long)]
    data: Option<String>,

    /// Built-in catalog: full or short
    #[arg(long)]
    catalog: Option<CatalogVariant>,

    /// YAML catalog file (overrides --catalog)
    #[arg(long)]
    catalog_path: Option<PathBuf>,

    /// Shuffle seed for a reproducible deck
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if let Some(variant) = args.catalog {
        config.sorter.catalog = variant;
    }
    if args.catalog_path.is_some() {
        config.sorter.catalog_path = args.catalog_path.clone();
    }
    if args.seed.is_some() {
        config.sorter.shuffle_seed = args.seed;
    }
    config.validate()?;

    init_tracing(&config.logging)?;

    let source: Box<dyn CatalogSource> = match &config.sorter.catalog_path {
        Some(path) => Box::new(YamlCatalogFile::new(path)),
        None => Box::new(BuiltinCatalog::new(config.sorter.catalog)),
    };
    let catalog = Arc::new(source.load()?);
    tracing::info!(source = %source.describe(), skills = catalog.len(), "Catalog loaded");

    let mut href = args.url.clone().unwrap_or_else(|| config.share.base_url.clone());
    if let Some(token) = &args.data {
        href = ShareLink::build(&href, &SnapshotToken::from(token.as_str())).into_string();
    }
    let location = Arc::new(InMemoryLocation::new(&href)?);

    let controller_config = ControllerConfig::from(&config);
    let advance_wait = controller_config.scheduler.advance_delay;
    let controller = SortingController::open(catalog, location, controller_config);

    print_help();
    render(&controller.view().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut held: Option<Choice> = None;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_ascii_lowercase();

        // An empty line releases the held direction
        if input.is_empty() {
            if let Some(choice) = held.take() {
                match controller.release_press(choice).await {
                    PressOutcome::Released(VoteOutcome::Recorded { intensity, .. }) => {
                        println!("  released {} at {}", choice, intensity);
                        tokio::time::sleep(advance_wait).await;
                        render(&controller.view().await);
                    }
                    other => println!("  release ignored: {:?}", other),
                }
            }
            continue;
        }

        match input.as_str() {
            "q" | "quit" => break,
            "y" | "n" => {
                let choice = Choice::from_yes(input == "y");
                controller.begin_press(choice).await;
                report_vote(controller.release_press(choice).await);
                tokio::time::sleep(advance_wait).await;
                render(&controller.view().await);
            }
            "hold y" | "hold n" => {
                let choice = Choice::from_yes(input == "hold y");
                match controller.begin_press(choice).await {
                    PressOutcome::Started { .. } => {
                        held = Some(choice);
                        println!("  holding {}... press enter to release", choice);
                    }
                    other => println!("  press ignored: {:?}", other),
                }
            }
            "tap" => {
                if !controller.tap().await.is_recorded() {
                    println!("  tap ignored");
                }
                tokio::time::sleep(advance_wait).await;
                render(&controller.view().await);
            }
            "r" | "restart" => {
                held = None;
                controller.restart().await;
                render(&controller.view().await);
            }
            "link" => match controller.share_link().await? {
                Some(link) => println!("  {}", link),
                None => println!("  no summary yet"),
            },
            "h" | "help" => print_help(),
            other => println!("  unknown command '{}'", other),
        }
    }

    controller.shutdown().await;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn print_help() {
    println!();
    println!("=== SKILL SORTER ===");
    println!("Commands:");
    println!("  y / n           - Quick vote (zero-length press)");
    println!("  hold y / hold n - Start holding; empty line releases");
    println!("  tap             - Click vote (yes, no intensity)");
    println!("  r               - Restart with a fresh shuffle");
    println!("  link            - Print the share link (summary only)");
    println!("  q               - Quit");
    println!();
}

fn report_vote(outcome: PressOutcome) {
    match outcome {
        PressOutcome::Released(VoteOutcome::Recorded { name, choice, .. }) => {
            println!("  {} -> {}", name, choice);
        }
        other => println!("  vote ignored: {:?}", other),
    }
}

fn render(view: &SessionView) {
    match view.stage {
        Stage::Round1 | Stage::Round2 => {
            if let Some(prompt) = view.prompt {
                println!(
                    "{}  [{:.0}% | {:.0}%]",
                    prompt,
                    view.progress_round1 * 100.0,
                    view.progress_round2 * 100.0
                );
            }
            if let Some(skill) = &view.current_item {
                println!("  {} - {}", skill, skill.description());
                println!("  {} left after this one", view.remaining_count);
            }
        }
        Stage::Summary => {
            if let Some(summary) = &view.summary {
                for quadrant in &summary.quadrants {
                    println!("{} ({})", quadrant.title, quadrant.subtitle);
                    for skill in &quadrant.skills {
                        println!(
                            "  {} {}  enjoy {} / good {}",
                            skill.emoji, skill.name, skill.enjoy, skill.good
                        );
                    }
                }
            }
            if !view.from_snapshot {
                let took = Timestamp::now().duration_since(&view.started_at);
                println!("Sorted in {}s.", took.num_seconds());
            }
            if !view.dropped_names.is_empty() {
                println!("  (not in this catalog: {})", view.dropped_names.join(", "));
            }
            println!("Type 'link' to share, 'r' to sort again.");
        }
        Stage::Error => {
            println!(
                "That link could not be read: {}",
                view.snapshot_error.as_deref().unwrap_or("unknown error")
            );
            println!("Type 'r' to start a fresh sort.");
        }
    }
}
