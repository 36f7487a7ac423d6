use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use ordcheck::cases::run_cases;
use ordcheck::compare_pair;
use ordcheck::config::{Config, Mode, LOG_ENV};
use std::path::PathBuf;
use std::process;

fn cli() -> Command<'static> {
    Command::new("ordcheck")
        .about("Evaluate <, <=, > and >= over runtime values")
        .version(env!("CARGO_PKG_VERSION"))
        .allow_negative_numbers(true)
        .arg(
            Arg::new("LEFT")
                .help("Left operand as JSON")
                .value_parser(value_parser!(String))
                .required_unless_present("cases")
                .index(1),
        )
        .arg(
            Arg::new("OP")
                .help("One of <, <=, >, >= (or lt, le, gt, ge)")
                .value_parser(value_parser!(String))
                .required_unless_present("cases")
                .index(2),
        )
        .arg(
            Arg::new("RIGHT")
                .help("Right operand as JSON")
                .value_parser(value_parser!(String))
                .required_unless_present("cases")
                .index(3),
        )
        .arg(
            Arg::new("cases")
                .help("Case files or directories of case files to run (comma separated or repeated)")
                .long("cases")
                .takes_value(true)
                .action(ArgAction::Append)
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all(&["LEFT", "OP", "RIGHT"]),
        )
        .arg(
            Arg::new("fail_fast")
                .help("Stop at the first failing case")
                .long("fail-fast")
                .requires("cases"),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity (repeatable)")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

fn init_logging(level: log::LevelFilter) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let cfg = Config::from_matches(&matches)?;
    init_logging(cfg.log_level);

    match &cfg.mode {
        Mode::Pair { left, op, right } => {
            let result = compare_pair(left, op, right)?;
            println!("{result}");
        }
        Mode::Cases(paths) => {
            let summary = run_cases(paths, cfg.fail_fast)?;
            for failure in &summary.failures {
                eprintln!("{failure}");
            }
            println!("{} passed, {} failed", summary.passed, summary.failed());
            if !summary.success() {
                process::exit(1);
            }
        }
    }
    Ok(())
}
