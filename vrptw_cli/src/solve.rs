use std::{fs::File, io::BufWriter, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Args;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use vrptw_optimizer::{
    parsers::{flat_file::FlatFileParser, parser::DatasetParser},
    report::Report,
    solver::{
        evaluated_solution::EvaluatedSolution,
        solver::{SolveResult, Solver},
        solver_params::{SolverParams, Threads, TieBreak},
    },
};

#[derive(Args)]
pub struct SolveArgs {
    /// The instance file to solve
    input: PathBuf,

    /// Answer file, defaults to `<INPUT>.ans`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads evaluating the neighborhood, all cores when omitted
    #[arg(short, long)]
    threads: Option<usize>,

    /// Break score ties by neighbor order so runs are reproducible
    #[arg(long)]
    deterministic: bool,

    /// Also dump the full result as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    info!("Solving {:?}", args.input);
    let instance = FlatFileParser.parse(&args.input)?;

    let mut solver = Solver::new(
        Arc::new(instance),
        SolverParams {
            threads: args.threads.map_or(Threads::Auto, Threads::Multi),
            tie_break: if args.deterministic {
                TieBreak::LowestIndex
            } else {
                TieBreak::Any
            },
            ..SolverParams::default()
        },
    );

    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} [{elapsed}] {msg}")?);

    let t_bar = bar.clone();
    solver.on_improvement(move |improvement| {
        t_bar.set_message(format!(
            "iteration {} ({}): {}",
            improvement.iteration, improvement.operator, improvement.score
        ));
    });

    let result = solver.solve();
    bar.finish_and_clear();
    let result = result?;

    let output = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone().into_os_string();
        path.push(".ans");
        PathBuf::from(path)
    });

    let report = Report::new(solver.instance(), &result);
    std::fs::write(&output, report.to_string())
        .with_context(|| format!("Cannot write {}", output.display()))?;
    info!("Answer written to {:?}", output);

    if let Some(json) = args.json {
        let file =
            File::create(&json).with_context(|| format!("Cannot create {}", json.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        info!("Result written to {:?}", json);
    }

    println!("{}", summary_table(&result));
    println!("{}", statistics_table(&result));

    Ok(())
}

fn summary_table(result: &SolveResult) -> Table {
    fn row(name: &str, solution: &EvaluatedSolution) -> Vec<String> {
        let analysis = &solution.score_analysis;
        vec![
            name.to_owned(),
            analysis.score.to_string(),
            format!("{:.2}", analysis.distance),
            analysis.penalty.to_string(),
            format!("{:.2}", analysis.vehicle_cost),
            solution.solution.len().to_string(),
        ]
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Solution", "Score", "Distance", "Penalty", "Vehicle cost", "Routes",
    ]);
    table.add_row(row("Initial", &result.initial));
    table.add_row(row("Best", &result.best));
    table
}

fn statistics_table(result: &SolveResult) -> Table {
    let statistics = &result.statistics;

    let mut operators = statistics.accepted_moves().iter().collect::<Vec<_>>();
    operators.sort();

    let mut moves = Table::new();
    moves.set_header(vec!["Operator", "Accepted moves"]);
    for (operator, count) in operators {
        moves.add_row(vec![operator.to_string(), count.to_string()]);
    }
    moves.add_row(vec![
        String::from("Iterations"),
        statistics.iterations().to_string(),
    ]);
    moves.add_row(vec![
        String::from("Neighbors evaluated"),
        statistics.neighbors_evaluated().to_string(),
    ]);
    moves.add_row(vec![
        String::from("Elapsed"),
        format!("{:.2}s", statistics.elapsed().as_secs_f64()),
    ]);
    moves
}
