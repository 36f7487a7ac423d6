use anyhow::{bail, Context, Result};
use ordering_core::{compare, ComparisonError, Operator, RuntimeValue};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: Option<String>,
    pub left: RuntimeValue,
    pub op: String,
    pub right: RuntimeValue,
    pub expect: Expectation,
}

/// Either the boolean the comparison must produce, or `{"error": "..."}`
/// with a fragment of the error message it must fail with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Expectation {
    Value(bool),
    Error { error: String },
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Value(b) => write!(f, "{b}"),
            Expectation::Error { error } => write!(f, "error containing '{error}'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub location: String,
    pub name: Option<String>,
    pub detail: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "FAIL {} ({}): {}", self.location, name, self.detail),
            None => write!(f, "FAIL {}: {}", self.location, self.detail),
        }
    }
}

#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    pub failures: Vec<Failure>,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Case {
    fn evaluate(&self) -> Result<bool, ComparisonError> {
        let op: Operator = self.op.parse()?;
        compare(&self.left, &self.right, op)
    }

    /// Run the case, returning a description of the mismatch if it failed.
    pub fn check(&self) -> Option<String> {
        let actual = self.evaluate();
        let got = match (&self.expect, &actual) {
            (Expectation::Value(want), Ok(got)) if want == got => return None,
            (Expectation::Error { error }, Err(err)) if err.to_string().contains(error.as_str()) => {
                return None
            }
            (_, Ok(got)) => got.to_string(),
            (_, Err(err)) => format!("error '{err}'"),
        };
        Some(format!(
            "{} {} {}: expected {}, got {}",
            self.left, self.op, self.right, self.expect, got
        ))
    }
}

/// Expand directories into the `.json` files beneath them, in a stable order.
/// A file reachable through more than one argument is only listed once.
pub fn collect_case_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = BTreeSet::new();
    let mut push = |file: PathBuf| {
        let key = fs::canonicalize(&file).unwrap_or_else(|_| file.clone());
        if seen.insert(key) {
            files.push(file);
        }
    };
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if entry.file_type().is_file()
                    && entry.path().extension().unwrap_or_default() == "json"
                {
                    push(entry.into_path());
                }
            }
        } else if path.is_file() {
            push(path.clone());
        } else {
            bail!("case path {} does not exist", path.display());
        }
    }
    Ok(files)
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let cases: Vec<Case> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse cases in {}", path.display()))?;
    Ok(cases)
}

pub fn run_cases(paths: &[PathBuf], fail_fast: bool) -> Result<Summary> {
    let mut summary = Summary::default();
    for file in collect_case_files(paths)? {
        let cases = load_cases(&file)?;
        log::info!("running {} cases from {}", cases.len(), file.display());

        for (index, case) in cases.iter().enumerate() {
            match case.check() {
                None => {
                    log::debug!("{}#{index} passed", file.display());
                    summary.passed += 1;
                }
                Some(detail) => {
                    let failure = Failure {
                        location: format!("{}#{index}", file.display()),
                        name: case.name.clone(),
                        detail,
                    };
                    log::debug!("{failure}");
                    summary.failures.push(failure);
                    if fail_fast {
                        return Ok(summary);
                    }
                }
            }
        }
    }
    Ok(summary)
}
