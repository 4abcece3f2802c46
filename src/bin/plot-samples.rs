use std::path::PathBuf;

use clap::Parser;
use power_analysis::{analyze, AnalysisParams};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Arg {
    /// Path to the capture file with comma-separated current samples
    pub samples_file: PathBuf,

    /// Path to the params file in yaml format (defaults apply when omitted)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Override the wifi current threshold in amperes
    #[clap(long)]
    pub threshold: Option<f64>,

    /// Report wifi energy without subtracting the idle baseline
    #[clap(long)]
    pub no_baseline: bool,
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arg::parse();

    let mut params: AnalysisParams = if let Some(config_file) = &args.config {
        serde_yaml::from_reader(std::fs::File::open(config_file)?)?
    } else {
        AnalysisParams::default()
    };
    if let Some(threshold) = args.threshold {
        params.wifi_threshold = threshold;
    }
    if args.no_baseline {
        params.subtract_idle_baseline = false;
    }

    let report = analyze(&args.samples_file, &params)?;

    if let Some(idle_current) = report.idle_current {
        println!("Average Operating Current: {idle_current} A");
    }
    println!("Total energy consumption: {} J", report.total_energy);
    println!("Wifi energy consumption: {} J", report.wifi_energy);

    Ok(())
}
