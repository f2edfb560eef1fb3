//! Output formatting utilities.

use colored::Colorize;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs rows in the specified format.
pub fn output<T: Tabled + serde::Serialize>(
    data: &[T],
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                info("No results found.");
            } else {
                let table = Table::new(data).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            println!("{json}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Outputs a single item.
pub fn output_single<T: serde::Serialize>(item: &T, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            let json = serde_json::to_value(item)?;
            for line in render_value(&json, 0) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item)?;
            println!("{json}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Renders a JSON value as indented `key: value` lines.
fn render_value(value: &Value, indent: usize) -> Vec<String> {
    let prefix = "  ".repeat(indent);

    match value {
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::Array(_) | Value::Object(_) => {
                    let mut lines = vec![format!("{prefix}-")];
                    lines.extend(render_value(item, indent + 1));
                    lines
                }
                _ => vec![format!("{prefix}- {}", scalar(item))],
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, val)| match val {
                Value::Array(_) | Value::Object(_) => {
                    let mut lines = vec![format!("{prefix}{key}:")];
                    lines.extend(render_value(val, indent + 1));
                    lines
                }
                _ => vec![format!("{prefix}{key}: {}", scalar(val))],
            })
            .collect(),
        _ => vec![format!("{prefix}{}", scalar(value))],
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Prompts for confirmation.
pub fn confirm(message: &str) -> crate::CliResult<bool> {
    print!("{message} [y/N]: ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}
