use anyhow::Result;
use clap::Parser;
use check_replicates::ReadSuffixes;

#[derive(Parser)]
#[command(name = "check-replicates")]
#[command(version, about = "Are there replicates? Prints true if R1/R2 (or r1/r2) read suffixes are present")]
struct Args {
    #[arg(
        short = 's',
        long,
        alias = "sample_names",
        num_args = 1..,
        required = true,
        help = "Sample names, e.g. -s sample1_R1 sample1_R2 (list brackets and commas are stripped)"
    )]
    sample_names: Vec<String>,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output showing each parsed suffix")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    // 任何一个样本名不合法都会让整批判断失败，不输出 true/false
    let suffixes = ReadSuffixes::from_sample_names(&args.sample_names)?;
    log::debug!("{} sample names, {} distinct suffixes", args.sample_names.len(), suffixes.len());

    match suffixes.pairing() {
        Some(pairing) => log::debug!("Found paired suffixes {:?}", pairing.suffixes()),
        None => log::debug!("No R1/R2 or r1/r2 pair found"),
    }

    println!("{}", suffixes.has_replicates());
    Ok(())
}
