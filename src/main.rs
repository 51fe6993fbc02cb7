use clap::Parser;
use roshambo::cli::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.verbose, args.log_file.as_deref())?;
    CLI::try_from(&args)?.run()
}
