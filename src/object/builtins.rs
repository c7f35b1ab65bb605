//! The builtin function table: `len`, plus the `first`/`last`/`rest`/`push`/
//! `puts` family the language leaves as an implementor's option.

use super::Value;
use std::rc::Rc;

/// Looks up a builtin by name, returning its implementation if one exists.
pub fn lookup(name: &str) -> Option<Value> {
    let builtin = match name {
        "len" => len,
        "first" => first,
        "last" => last,
        "rest" => rest,
        "push" => push,
        "puts" => puts,
        _ => return None,
    };
    Some(Value::Builtin(builtin))
}

fn wrong_arity(want: &str, got: usize) -> Value {
    Value::error(format!("wrong number of arguments. want={}, got={}", want, got))
}

fn len(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("1", args.len());
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn first(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("1", args.len());
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("1", args.len());
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn rest(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("1", args.len());
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Value::error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn push(args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return wrong_arity("2", args.len());
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.as_ref().clone();
            new_elements.push(args[1].clone());
            Value::Array(Rc::new(new_elements))
        }
        other => Value::error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn puts(args: Vec<Value>) -> Value {
    for arg in &args {
        println!("{}", arg);
    }
    Value::Null
}
