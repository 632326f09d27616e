//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{OutputFormat, VerdictArgs};
use crate::error::Result;

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &VerdictArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &VerdictArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    print_value(&value, 0);
    Ok(())
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &VerdictArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print a JSON value as indented "key: value" lines.
fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                match inner {
                    Value::Object(_) => {
                        println!("{pad}{key}:");
                        print_value(inner, indent + 1);
                    }
                    _ => println!("{pad}{key}: {}", scalar_to_string(inner)),
                }
            }
        }
        other => println!("{pad}{}", scalar_to_string(other)),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(f) = n.as_f64()
                && n.as_i64().is_none()
            {
                format!("{f:.2}")
            } else {
                n.to_string()
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_formatting() {
        assert_eq!(scalar_to_string(&Value::String("ok".into())), "ok");
        assert_eq!(scalar_to_string(&serde_json::json!(true)), "true");
        assert_eq!(scalar_to_string(&serde_json::json!(3)), "3");
        assert_eq!(scalar_to_string(&serde_json::json!(97.4567)), "97.46");
    }
}
