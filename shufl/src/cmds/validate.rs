use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shufl_core::sequence;
use shufl_core::{DummyShuffler, DurstenfeldShuffler, NaiveShuffler, Shuffler};
use shufl_validation::UniformityValidator;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum Algorithm {
    Durstenfeld,
    Naive,
    Dummy,
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long)]
    input: String,

    #[clap(long, value_enum, default_value = "durstenfeld")]
    algorithm: Algorithm,

    #[clap(long, default_value = "600000")]
    iterations: u32,

    #[clap(long, default_value = "0.2")]
    low_margin: f64,

    #[clap(long, default_value = "0.2")]
    high_margin: f64,

    #[clap(long)]
    seed: Option<u64>,

    #[clap(long)]
    report: Option<PathBuf>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let items = sequence::from_dasherized(&opts.input);
    let mut shuffler: Box<dyn Shuffler> = match opts.algorithm {
        Algorithm::Durstenfeld => Box::new(DurstenfeldShuffler::create(opts.seed)),
        Algorithm::Naive => Box::new(NaiveShuffler::create(opts.seed)),
        Algorithm::Dummy => Box::new(DummyShuffler::new()),
    };

    log::info!(
        "Validating {} over {:?} with target {}",
        shuffler.name(),
        opts.input,
        opts.iterations
    );
    let validator = UniformityValidator::new(opts.iterations, opts.low_margin, opts.high_margin);
    let report = validator.run(shuffler.as_mut(), &items)?;

    println!("algorithm: {}", report.algorithm);
    println!(
        "iterations: {} over {} permutation classes",
        report.iterations, report.permutation_classes
    );
    println!(
        "expected count per class: {} (bounds {:.1} to {:.1})",
        report.expected_count, report.low_threshold, report.high_threshold
    );
    println!(
        "observed classes: {} ({} never seen)",
        report.observed_classes, report.unobserved_classes
    );
    if let Some(largest) = &report.largest_class {
        println!(
            "largest class: {} seen {} times",
            largest.permutation, largest.count
        );
    }

    if let Some(path) = &opts.report {
        report.as_json_file(path.to_str().ok_or_else(|| {
            anyhow::anyhow!("Invalid file path: contains non-Unicode characters")
        })?)?;
        println!("📄 Report saved to: {}", path.display());
    }

    if !report.passed() {
        for class in &report.overrepresented {
            println!(
                "🚨 {} appeared {} times, above {:.1}",
                class.permutation, class.count, report.high_threshold
            );
        }
        for class in &report.underrepresented {
            println!(
                "🚨 {} appeared {} times, below {:.1}",
                class.permutation, class.count, report.low_threshold
            );
        }
        anyhow::bail!("{} failed the uniformity check", report.algorithm);
    }

    println!("✨ Distribution looks uniform!");

    Ok(())
}
