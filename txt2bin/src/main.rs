use std::process;

use txt2bin::cli::{self, ParseOutcome};
use txt2bin::logging::setup_logging;

fn main() {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ParseOutcome::Info(text)) => {
            print!("{text}");
            return;
        }
        Err(ParseOutcome::Usage(text)) => {
            println!("{}", text.trim_end());
            process::exit(1);
        }
    };

    setup_logging(&cli.log_level, cli.log_format);

    match txt2bin::run(cli.config(), &cli.source, &cli.output) {
        Ok(summary) => {
            tracing::info!(
                tokens = summary.tokens,
                malformed = summary.malformed,
                retained = summary.retained,
                discarded = summary.discarded,
                bytes_written = summary.bytes_written,
                leftover_bits = summary.leftover_bits,
                tail_flushed = summary.tail_flushed,
                "packed numbers"
            );
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
