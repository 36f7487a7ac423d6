use anyhow::{anyhow, Result};
use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

/*
 * Environment variable read by the logger for filter directives, e.g. `ORDCHECK_LOG=trace`.
 */
pub const LOG_ENV: &str = "ORDCHECK_LOG";

/*
 * What ordcheck was asked to do.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Compare a single pair of JSON encoded values.
    Pair {
        left: String,
        op: String,
        right: String,
    },
    /// Run every case in the given files or directories.
    Cases(Vec<PathBuf>),
}

/*
 * Config holds everything needed for a single ordcheck run.
 */
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub fail_fast: bool,
    pub log_level: LevelFilter,
}

/*
 * Runs the bundled case directory quietly.
 */
impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Cases(vec![PathBuf::from("working_dir/cases")]),
            fail_fast: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut cfg = Config::default();

        if let Some(paths) = matches.get_many::<PathBuf>("cases") {
            cfg.mode = Mode::Cases(paths.cloned().collect());
        } else if matches.contains_id("LEFT") {
            let get = |id: &str| {
                matches
                    .get_one::<String>(id)
                    .cloned()
                    .ok_or_else(|| anyhow!("missing {id} argument"))
            };
            cfg.mode = Mode::Pair {
                left: get("LEFT")?,
                op: get("OP")?,
                right: get("RIGHT")?,
            };
        }

        cfg.fail_fast = matches.contains_id("fail_fast");
        cfg.log_level = match matches.get_count("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Ok(cfg)
    }
}
