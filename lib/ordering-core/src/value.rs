use core::fmt;

/// An already-evaluated value handed over by the host evaluator.
///
/// Integers, signed zero and NaN all share the `Number` variant. Lists own
/// their elements, so a list can never contain itself.
#[derive(Clone, Debug)]
pub enum RuntimeValue {
    Number(f64),
    Boolean(bool),
    Text(String),
    List(Vec<RuntimeValue>),
}

impl RuntimeValue {
    pub fn number(n: f64) -> Self {
        RuntimeValue::Number(n)
    }

    /// What the host produces for `0/0`.
    pub fn nan() -> Self {
        RuntimeValue::Number(f64::NAN)
    }

    pub fn boolean(b: bool) -> Self {
        RuntimeValue::Boolean(b)
    }

    pub fn text(s: impl Into<String>) -> Self {
        RuntimeValue::Text(s.into())
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RuntimeValue>,
    {
        RuntimeValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RuntimeValue::Number(_) => "number",
            RuntimeValue::Boolean(_) => "bool",
            RuntimeValue::Text(_) => "str",
            RuntimeValue::List(_) => "list",
        }
    }

    /// Numeric view used for ordering. Booleans coerce to 0 and 1.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuntimeValue::Number(n) => Some(*n),
            RuntimeValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            RuntimeValue::Text(_) | RuntimeValue::List(_) => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, RuntimeValue::Number(n) if n.is_nan())
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeValue::Number(n) if n.is_nan() => f.write_str("nan"),
            RuntimeValue::Number(n) => write!(f, "{n}"),
            RuntimeValue::Boolean(true) => f.write_str("True"),
            RuntimeValue::Boolean(false) => f.write_str("False"),
            RuntimeValue::Text(s) => write!(f, "{s:?}"),
            RuntimeValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<f64> for RuntimeValue {
    fn from(value: f64) -> Self {
        RuntimeValue::Number(value)
    }
}

impl From<i32> for RuntimeValue {
    fn from(value: i32) -> Self {
        RuntimeValue::Number(value as f64)
    }
}

impl From<i64> for RuntimeValue {
    fn from(value: i64) -> Self {
        RuntimeValue::Number(value as f64)
    }
}

impl From<bool> for RuntimeValue {
    fn from(value: bool) -> Self {
        RuntimeValue::Boolean(value)
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        RuntimeValue::Text(value.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(value: String) -> Self {
        RuntimeValue::Text(value)
    }
}

impl From<Vec<RuntimeValue>> for RuntimeValue {
    fn from(value: Vec<RuntimeValue>) -> Self {
        RuntimeValue::List(value)
    }
}
