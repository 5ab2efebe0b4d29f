use std::{ops::Range, path::PathBuf};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use vrptw_optimizer::generator::{CaseType, GeneratorParams, generate};

use crate::parsers;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output folder for the instance files
    #[arg(short, long)]
    output: PathBuf,

    /// Number of locations, the depot included
    #[arg(short, long, default_value_t = 100)]
    dimension: usize,

    /// Number of fixed vehicles
    #[arg(short, long, default_value_t = 10)]
    vehicles: usize,

    /// Case types to generate, e.g. "0..27" or "13"
    #[arg(long, value_parser = parsers::parse_range, default_value = "0..27")]
    case_types: Range<u32>,

    /// Random seeds to generate, e.g. "17..20"
    #[arg(long, value_parser = parsers::parse_range, default_value = "17..20")]
    seeds: Range<u32>,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    if let Some(case_type) = args.case_types.clone().find(|&c| c >= CaseType::COUNT) {
        anyhow::bail!(
            "Case type {case_type} is out of range, expected less than {}",
            CaseType::COUNT
        );
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Cannot create {}", args.output.display()))?;

    let total = args.case_types.len() * args.seeds.len();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] ({pos}/{len})")?);

    for case_type in args.case_types.clone() {
        for seed in args.seeds.clone() {
            let params = GeneratorParams::new(
                args.dimension,
                args.vehicles,
                CaseType::new(case_type),
                u64::from(seed),
            );

            let path = args
                .output
                .join(format!("in_type{case_type:02}_seed{seed:02}.txt"));
            std::fs::write(&path, generate(&params))
                .with_context(|| format!("Cannot write {}", path.display()))?;

            bar.inc(1);
        }
    }

    bar.finish_and_clear();
    info!("Generated {} instances into {:?}", total, args.output);

    Ok(())
}
