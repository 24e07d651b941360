use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use devotional_taxonomy::catalog::{self, ClassifiedVideo, VideoRecord};
use devotional_taxonomy::report;
use devotional_taxonomy::settings::Settings;
use devotional_taxonomy::{RuleBook, Taxonomy};

#[derive(Parser)]
#[command(name = "taxonomy", about = "Devotional video title classifier")]
struct Cli {
    /// Records per parallel batch (overrides TAXONOMY_CHUNK_SIZE)
    #[arg(long, global = true)]
    chunk_size: Option<usize>,
    /// Worker threads, 0 for rayon's default (overrides TAXONOMY_THREADS)
    #[arg(long, global = true)]
    threads: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a JSON array of videos and write the enriched list
    Classify {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Also write the grouped category/subcategory document here
        #[arg(short, long)]
        grouped: Option<PathBuf>,
    },
    /// Print the category/subcategory grid for a video file
    Grid {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Compile every rule table and print their sizes
    Check,
    /// Classify a single title
    Title {
        text: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("loading TAXONOMY_* settings")?;
    if let Some(n) = cli.chunk_size.filter(|n| *n > 0) {
        settings.chunk_size = n;
    }
    if let Some(n) = cli.threads {
        settings.threads = n;
    }
    if settings.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .context("configuring worker threads")?;
    }

    let book = RuleBook::build().context("rule tables are malformed")?;

    let result = match cli.command {
        Commands::Classify { input, output, grouped } => {
            let taxonomy = load_and_group(&book, &input, settings.chunk_size)?;
            catalog::write_json(&output, taxonomy.videos())?;
            println!("Wrote {} videos to {}", taxonomy.videos().len(), output.display());
            if let Some(path) = grouped {
                let doc = taxonomy.document(chrono::Local::now().date_naive());
                catalog::write_json(&path, &doc)?;
                println!(
                    "Wrote {} categories, {} subcategories to {}",
                    doc.total_categories,
                    doc.total_subcategories,
                    path.display()
                );
            }
            Ok(())
        }
        Commands::Grid { input } => {
            let taxonomy = load_and_group(&book, &input, settings.chunk_size)?;
            print!("{}", report::render_grid(&taxonomy)?);
            Ok(())
        }
        Commands::Check => {
            for (category, n) in book.categories.pattern_counts() {
                println!("{:<24} {:>4} patterns", category.name(), n);
            }
            for vocab in [&book.sections.skandha, &book.sections.kanda, &book.sections.parva] {
                println!(
                    "{:<24} {:>4} aliases -> {} sections",
                    vocab.table(),
                    vocab.alias_count(),
                    vocab.canonical().len()
                );
            }
            println!("{:<24} {:>4} rules", "topics", book.topics.topic_count());
            println!("Rule book OK.");
            Ok(())
        }
        Commands::Title { text, description } => {
            let v = book.classify(VideoRecord {
                title: text,
                description,
                ..Default::default()
            });
            println!("{}", report::render_single(v.category, &v.subcategory, v.language));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn load_and_group(book: &RuleBook, input: &Path, chunk_size: usize) -> anyhow::Result<Taxonomy> {
    let records = catalog::load_records(input)?;
    info!(videos = records.len(), input = %input.display(), "loaded");
    if records.is_empty() {
        println!("No videos in {}.", input.display());
    }

    let t_classify = Instant::now();
    let classified = classify_records(book, &records, chunk_size)?;
    info!(secs = t_classify.elapsed().as_secs_f64(), "classified");

    let mut taxonomy = Taxonomy::group(classified);
    taxonomy.consolidate();
    info!(categories = taxonomy.categories().count(), "consolidated");
    Ok(taxonomy)
}

fn classify_records(
    book: &RuleBook,
    records: &[VideoRecord],
    chunk_size: usize,
) -> anyhow::Result<Vec<ClassifiedVideo>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut out = Vec::with_capacity(records.len());
    for chunk in records.chunks(chunk_size.max(1)) {
        out.extend(book.classify_all(chunk.to_vec()));
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(out)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
