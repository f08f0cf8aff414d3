use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::report::ReportWriter;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the echolocation cone core")]
struct Args {
    /// Load a workflow config from YAML (overrides the flags below)
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 90)]
    frames: usize,
    /// Requested sample draws; draws outside the outer ring are dropped
    #[arg(long, default_value_t = 10)]
    samples: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Append one JSON line per frame to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Print every frame summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.frames, args.samples, args.seed)
    };
    info!(
        "running {} frames with {:?} pointer",
        workflow_config.frames, workflow_config.pointer
    );

    let result = Runner::new(workflow_config).execute()?;

    if args.json {
        for frame in &result.frames {
            println!(
                "{}",
                serde_json::to_string(frame).context("encoding frame summary")?
            );
        }
    }

    println!(
        "Run -> samples {}, frames {}, in-cone hits {}, culled {}",
        result.sample_count, result.metrics.frames, result.metrics.in_cone, result.metrics.excluded
    );
    if let Some(last) = result.frames.last() {
        println!(
            "Last frame -> heading {:.1} deg, silhouettes {:?}, left {:?}, right {:?}",
            last.heading_deg, last.silhouettes, last.left_exits, last.right_exits
        );
    }

    if let Some(path) = args.report {
        ReportWriter::new(&path).append(&result.frames)?;
        info!("report appended to {}", path.display());
    }

    Ok(())
}
