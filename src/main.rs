//! Command line entry point: transforms backend search responses, inspects
//! highlight fragments and tokenizes fallback query terms.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use search_transformer::cli::args::TransformerArgs;
use search_transformer::cli::commands::execute_command;

fn main() {
    let args = TransformerArgs::parse();

    // -q silences warnings such as unterminated highlight markers; -vvv shows
    // per-transform summaries.
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    if let Err(err) = execute_command(args) {
        eprintln!("search-transformer: {err}");
        process::exit(1);
    }
}
