use bytedigits::Args;
use clap::Parser;
use colored::*;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
fn main() {
    let args = Args::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(args.debug)
        .with_line_number(args.debug);
    let registry = tracing_subscriber::registry().with(filter);
    if args.without_time {
        registry.with(fmt_layer.without_time()).init();
    } else {
        registry.with(fmt_layer).init();
    }
    debug!("{:?}", args);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = bytedigits::run(&args, stdin.lock(), &mut stdout) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
