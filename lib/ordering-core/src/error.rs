use crate::operator::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// The two operand types have no ordering between them, e.g. `str` and `list`.
    #[error("{} not supported between instances of '{left}' and '{right}'", describe(.op))]
    UnsupportedComparison {
        op: Option<Operator>,
        left: &'static str,
        right: &'static str,
    },

    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),

    /// A JSON document could not be mapped onto a runtime value.
    #[cfg(feature = "json")]
    #[error("cannot convert {0} to a runtime value")]
    Conversion(String),
}

impl ComparisonError {
    pub(crate) fn unsupported(left: &'static str, right: &'static str) -> Self {
        ComparisonError::UnsupportedComparison {
            op: None,
            left,
            right,
        }
    }

    /// Attach the operator that was being evaluated when the error surfaced.
    pub(crate) fn with_operator(self, op: Operator) -> Self {
        match self {
            ComparisonError::UnsupportedComparison { left, right, .. } => {
                ComparisonError::UnsupportedComparison {
                    op: Some(op),
                    left,
                    right,
                }
            }
            other => other,
        }
    }
}

fn describe(op: &Option<Operator>) -> String {
    match op {
        Some(op) => format!("'{}'", op.symbol()),
        None => "ordering".to_string(),
    }
}
