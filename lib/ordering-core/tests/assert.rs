#![allow(dead_code)]
use ordering_core::{compare, Operator, RuntimeValue};

pub type Case = (RuntimeValue, &'static str, RuntimeValue);

pub fn n(value: f64) -> RuntimeValue {
    RuntimeValue::number(value)
}

pub fn b(value: bool) -> RuntimeValue {
    RuntimeValue::boolean(value)
}

pub fn s(value: &str) -> RuntimeValue {
    RuntimeValue::text(value)
}

pub fn nan() -> RuntimeValue {
    RuntimeValue::nan()
}

pub fn list<const N: usize>(items: [RuntimeValue; N]) -> RuntimeValue {
    RuntimeValue::list(items)
}

fn eval(left: &RuntimeValue, op: &str, right: &RuntimeValue) -> bool {
    let op: Operator = match op.parse() {
        Ok(op) => op,
        Err(e) => panic!("Bad operator in case '{left} {op} {right}': {e}"),
    };
    match compare(left, right, op) {
        Ok(v) => v,
        Err(e) => panic!("Comparison error in case '{left} {op} {right}': {e}"),
    }
}

pub fn all_true(cases: &[Case]) {
    for (left, op, right) in cases {
        if !eval(left, op, right) {
            panic!("Assertion failed for case: {left} {op} {right}");
        }
    }
}

pub fn all_false(cases: &[Case]) {
    for (left, op, right) in cases {
        if eval(left, op, right) {
            panic!("Expected false for case: {left} {op} {right}");
        }
    }
}

pub fn fail(left: RuntimeValue, op: &str, right: RuntimeValue, msg_part: &str) {
    let parsed: Operator = match op.parse() {
        Ok(op) => op,
        Err(e) => panic!("Bad operator '{op}': {e}"),
    };
    match compare(&left, &right, parsed) {
        Ok(v) => panic!("Expected error containing '{msg_part}', but got value: {v}"),
        Err(e) => {
            let msg = e.to_string();
            if !msg.contains(msg_part) {
                panic!("Expected error containing '{msg_part}', but got: '{msg}' for case: '{left} {op} {right}'");
            }
        }
    }
}
