//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::cli::args::{EduDeskArgs, OutputFormat};
use crate::entity::EntityKind;
use crate::error::Result;
use crate::manager::ManagerStats;
use crate::pagination::Page;

/// Result structure for list, search and filter commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage<T> {
    pub entity: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub page: Page<T>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport<S> {
    pub entity: EntityKind,
    #[serde(flatten)]
    pub stats: ManagerStats<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheReport>,
}

/// Cache counters for the search and filter caches.
#[derive(Debug, Serialize)]
pub struct CacheReport {
    pub search: CacheStats,
    pub filter: CacheStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &EduDeskArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &EduDeskArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match &value {
        Value::Object(obj) if obj.contains_key("data") && obj.contains_key("totalPages") => {
            output_page_human(&value);
        }
        _ => output_generic_human(&value, 0),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EduDeskArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output a page of records as one line per record.
fn output_page_human(value: &Value) {
    let Some(obj) = value.as_object() else {
        return;
    };

    let entity = obj.get("entity").and_then(Value::as_str).unwrap_or("records");
    match obj.get("query").and_then(Value::as_str) {
        Some(query) => println!("{entity} matching \"{query}\":"),
        None => println!("{entity}:"),
    }
    println!("─────────────");

    if let Some(records) = obj.get("data").and_then(Value::as_array) {
        for record in records {
            println!("{}", record_line(record));
        }
        if records.is_empty() {
            println!("(no records)");
        }
    }

    println!();
    let number = |key: &str| obj.get(key).and_then(Value::as_u64).unwrap_or(0);
    println!(
        "Page {} of {} (showing {}-{} of {})",
        number("currentPage"),
        number("totalPages"),
        number("startIndex"),
        number("endIndex"),
        number("totalItems")
    );
}

/// `#id name <email> [status]`, skipping parts a record lacks.
fn record_line(record: &Value) -> String {
    let text = |key: &str| record.get(key).and_then(Value::as_str).unwrap_or("");

    let mut line = format!(
        "#{:<4} {}",
        record.get("id").and_then(Value::as_u64).unwrap_or(0),
        text("name")
    );
    if !text("email").is_empty() {
        line.push_str(&format!(" <{}>", text("email")));
    }
    if !text("status").is_empty() {
        line.push_str(&format!(" [{}]", text("status")));
    }
    line
}

/// Output any value as indented `key: value` lines.
fn output_generic_human(value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(obj) => {
            for (key, value) in obj {
                match value {
                    Value::Object(_) => {
                        println!("{indent}{}:", humanize_key(key));
                        output_generic_human(value, depth + 1);
                    }
                    Value::Array(items) if items.iter().any(Value::is_object) => {
                        println!("{indent}{}:", humanize_key(key));
                        for item in items {
                            output_generic_human(item, depth + 1);
                            println!();
                        }
                    }
                    _ => println!("{indent}{}: {}", humanize_key(key), scalar(value)),
                }
            }
        }
        _ => println!("{indent}{}", scalar(value)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.2}"),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// `averageProgress` → `Average progress`.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
