use crate::error::ComparisonError;
use crate::operator::Operator;
use crate::value::RuntimeValue;
use core::cmp::Ordering;

/// Result of ordering two values. `Unordered` is what NaN produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl Outcome {
    /// Project the outcome onto a relational operator.
    pub fn satisfies(self, op: Operator) -> bool {
        match self {
            Outcome::Less => matches!(op, Operator::Lt | Operator::LtEq),
            Outcome::Equal => matches!(op, Operator::LtEq | Operator::GtEq),
            Outcome::Greater => matches!(op, Operator::Gt | Operator::GtEq),
            Outcome::Unordered => false,
        }
    }

    /// The outcome seen with the operands swapped.
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::Less => Outcome::Greater,
            Outcome::Greater => Outcome::Less,
            other => other,
        }
    }

    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Outcome::Less => Some(Ordering::Less),
            Outcome::Equal => Some(Ordering::Equal),
            Outcome::Greater => Some(Ordering::Greater),
            Outcome::Unordered => None,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Outcome::Less,
            Ordering::Equal => Outcome::Equal,
            Ordering::Greater => Outcome::Greater,
        }
    }
}

impl From<Option<Ordering>> for Outcome {
    fn from(ord: Option<Ordering>) -> Self {
        ord.map_or(Outcome::Unordered, Outcome::from)
    }
}

/// Order two values.
///
/// Numbers and booleans share one numeric scale (`false` is 0, `true` is 1)
/// and follow IEEE-754: `0` and `-0` are equal, NaN is unordered against
/// everything including itself. Strings order by code point. Lists order
/// element by element with this same function, and the shorter list wins
/// when one is a prefix of the other. A NaN reached while walking two lists
/// makes the lists unordered.
///
/// Any other pairing of types is an `UnsupportedComparison`.
pub fn order(left: &RuntimeValue, right: &RuntimeValue) -> Result<Outcome, ComparisonError> {
    let outcome = order_helper(left, right)?;
    log::trace!("order {left} <=> {right}: {outcome:?}");
    Ok(outcome)
}

/// Evaluate `left <op> right`.
pub fn compare(
    left: &RuntimeValue,
    right: &RuntimeValue,
    op: Operator,
) -> Result<bool, ComparisonError> {
    match order_helper(left, right) {
        Ok(outcome) => {
            let result = outcome.satisfies(op);
            log::trace!("{left} {op} {right}: {outcome:?} -> {result}");
            Ok(result)
        }
        Err(err) => {
            let err = err.with_operator(op);
            log::debug!("rejected {left} {op} {right}: {err}");
            Err(err)
        }
    }
}

fn order_helper(a: &RuntimeValue, b: &RuntimeValue) -> Result<Outcome, ComparisonError> {
    match (a, b) {
        (RuntimeValue::Text(s1), RuntimeValue::Text(s2)) => Ok(s1.cmp(s2).into()),
        (RuntimeValue::List(l1), RuntimeValue::List(l2)) => order_lists(l1, l2),
        _ => match (a.as_number(), b.as_number()) {
            (Some(n1), Some(n2)) => Ok(n1.partial_cmp(&n2).into()),
            _ => Err(ComparisonError::unsupported(a.type_name(), b.type_name())),
        },
    }
}

fn order_lists(la: &[RuntimeValue], lb: &[RuntimeValue]) -> Result<Outcome, ComparisonError> {
    for (x, y) in la.iter().zip(lb.iter()) {
        match order_helper(x, y)? {
            Outcome::Equal => continue,
            decided => return Ok(decided),
        }
    }
    Ok(la.len().cmp(&lb.len()).into())
}

// Equality is the `Equal` outcome of the ordering, nothing more. It keeps
// `PartialOrd` lawful and is not a general equality for the host language.
impl PartialEq for RuntimeValue {
    fn eq(&self, other: &Self) -> bool {
        matches!(order_helper(self, other), Ok(Outcome::Equal))
    }
}

impl PartialOrd for RuntimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        order_helper(self, other).ok().and_then(Outcome::to_ordering)
    }
}
