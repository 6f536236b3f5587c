//!
//! Check, print, apply and draw comparison networks.
//!
//! Usage: `sortnet [-i FILE] [--check [--json]] [--print] [--sort 3,1,2] [--svg [FILE]]`

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use sortnet::{render_svg, schedule, ComparisonNetwork, SvgStyle, Verifier};
use sortnet_tools::{format_values, parse_values, read_network, ProgressLogger};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "sortnet")]
#[command(about = "Verify, schedule and draw comparison networks")]
struct Args {
    /// File containing the network definition (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Check whether the network is a sorting network
    #[arg(short, long)]
    check: bool,

    /// Print the verification report as JSON
    #[arg(long, requires = "check")]
    json: bool,

    /// Log verification progress
    #[arg(long, requires = "check")]
    show_progress: bool,

    /// Print the network grouped into depth levels
    #[arg(short, long)]
    print: bool,

    /// Sort comma-separated integers with the network
    #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
    sort: Option<String>,

    /// Generate SVG, to FILE or stdout
    #[arg(short, long, value_name = "FILE", num_args = 0..=1, default_missing_value = "-")]
    svg: Option<PathBuf>,
}

impl Args {
    fn has_action(&self) -> bool {
        self.check || self.print || self.sort.is_some() || self.svg.is_some()
    }
}

fn main() {
    sortnet_tools::init_logging();

    let mut args = Args::parse();
    if !args.has_action() {
        args.check = true;
    }

    if let Err(e) = run(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let network = read_network(args.input.as_deref())?;
    let mut out = io::stdout().lock();

    if args.check {
        check(&network, args, &mut out)?;
    }

    if args.print {
        let levels = schedule(&network).context("failed to schedule network")?;
        writeln!(out, "{levels}")?;
    }

    if let Some(values) = &args.sort {
        let values = parse_values(values)?;
        let sorted = network
            .sort_sequence(&values)
            .context("failed to sort values")?;
        writeln!(out, "{}", format_values(&sorted))?;
    }

    if let Some(path) = &args.svg {
        let svg = render_svg(&network, SvgStyle::default()).context("failed to render SVG")?;
        if path.as_os_str() == "-" {
            writeln!(out, "{svg}")?;
        } else {
            fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
            info!("SVG written to {}", path.display());
        }
    }

    Ok(())
}

fn check(network: &ComparisonNetwork, args: &Args, out: &mut impl Write) -> Result<()> {
    let mut logger = ProgressLogger::default();
    let verifier = if args.show_progress {
        Verifier::new().with_observer(&mut logger)
    } else {
        Verifier::new()
    };

    let report = verifier.run(network).context("verification failed")?;
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.is_sorting_network)?;
    }
    Ok(())
}
