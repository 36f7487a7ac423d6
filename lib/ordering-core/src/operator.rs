use crate::comparison::compare;
use crate::error::ComparisonError;
use crate::value::RuntimeValue;
use core::fmt;
use core::str::FromStr;

/// A relational operator as written in the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Lt, Operator::LtEq, Operator::Gt, Operator::GtEq];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
        }
    }

    /// The operator that gives the same answer with the operands swapped.
    pub fn flip(&self) -> Operator {
        match self {
            Operator::Lt => Operator::Gt,
            Operator::LtEq => Operator::GtEq,
            Operator::Gt => Operator::Lt,
            Operator::GtEq => Operator::LtEq,
        }
    }

    pub fn apply(&self, left: &RuntimeValue, right: &RuntimeValue) -> Result<bool, ComparisonError> {
        compare(left, right, *self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => return Ok(Operator::Lt),
            "<=" => return Ok(Operator::LtEq),
            ">" => return Ok(Operator::Gt),
            ">=" => return Ok(Operator::GtEq),
            _ => {}
        }
        // Mnemonics for shells where angle brackets need quoting
        match s.to_ascii_lowercase().as_str() {
            "lt" => Ok(Operator::Lt),
            "le" => Ok(Operator::LtEq),
            "gt" => Ok(Operator::Gt),
            "ge" => Ok(Operator::GtEq),
            _ => Err(ComparisonError::UnknownOperator(s.to_string())),
        }
    }
}
