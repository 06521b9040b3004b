//! Command line argument parsing for the EduDesk CLI using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::query::sort::SortOrder;
use crate::record::RecordId;

/// EduDesk - indexed in-memory records for an education admin console
#[derive(Parser, Debug, Clone)]
#[command(name = "edudesk")]
#[command(about = "Query the students, staff and course records of an education admin console")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EduDeskArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Load records from a JSON array instead of the generated dataset
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Manager configuration file (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EduDeskArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List records page by page
    List(ListArgs),

    /// Show a single record
    Get(GetArgs),

    /// Search records by name, email or other fields
    Search(SearchArgs),

    /// Filter records by field substrings
    Filter(FilterArgs),

    /// Show dashboard statistics
    Stats(StatsArgs),
}

impl Command {
    /// The entity collection the command operates on.
    pub fn entity(&self) -> EntityKind {
        match self {
            Command::List(args) => args.entity,
            Command::Get(args) => args.entity,
            Command::Search(args) => args.entity,
            Command::Filter(args) => args.entity,
            Command::Stats(args) => args.entity,
        }
    }
}

/// Paging and ordering options shared by listing commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// 1-based page number
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Records per page (default: from configuration)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Field to sort by (dotted paths allowed, e.g. course.progress)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(short, long, default_value = "asc")]
    pub order: SortOrder,
}

/// Arguments for listing records
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Entity collection
    #[arg(value_name = "ENTITY", value_parser = EntityKind::from_str)]
    pub entity: EntityKind,

    #[command(flatten)]
    pub paging: PageArgs,
}

/// Arguments for showing a record
#[derive(Parser, Debug, Clone)]
pub struct GetArgs {
    /// Entity collection
    #[arg(value_name = "ENTITY", value_parser = EntityKind::from_str)]
    pub entity: EntityKind,

    /// Record id
    #[arg(value_name = "ID")]
    pub id: RecordId,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Entity collection
    #[arg(value_name = "ENTITY", value_parser = EntityKind::from_str)]
    pub entity: EntityKind,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Fields to search (comma-separated, default: from configuration)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

/// Arguments for filtering
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// Entity collection
    #[arg(value_name = "ENTITY", value_parser = EntityKind::from_str)]
    pub entity: EntityKind,

    /// Field filter, repeatable; matches by case-insensitive substring
    #[arg(short = 'w', long = "where", value_name = "FIELD=VALUE", value_parser = parse_condition)]
    pub conditions: Vec<(String, String)>,

    /// Free-text term matched against the search fields
    #[arg(short, long)]
    pub term: Option<String>,

    /// Fields the term is matched against (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Entity collection
    #[arg(value_name = "ENTITY", value_parser = EntityKind::from_str)]
    pub entity: EntityKind,

    /// Include cache counters
    #[arg(long)]
    pub cache: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a `FIELD=VALUE` filter condition.
pub fn parse_condition(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid condition '{s}': expected FIELD=VALUE"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("invalid condition '{s}': field name is empty"));
    }
    Ok((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_command() {
        let args = EduDeskArgs::try_parse_from([
            "edudesk",
            "list",
            "students",
            "--page",
            "2",
            "--page-size",
            "10",
            "--sort",
            "course.progress",
            "--order",
            "desc",
        ])
        .unwrap();

        assert_eq!(args.command.entity(), EntityKind::Students);
        if let Command::List(list_args) = args.command {
            assert_eq!(list_args.paging.page, 2);
            assert_eq!(list_args.paging.page_size, Some(10));
            assert_eq!(list_args.paging.sort.as_deref(), Some("course.progress"));
            assert_eq!(list_args.paging.order, SortOrder::Desc);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_search_command_with_fields() {
        let args = EduDeskArgs::try_parse_from([
            "edudesk",
            "search",
            "users",
            "admin",
            "--fields",
            "role,department",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query, "admin");
            assert_eq!(search_args.fields, vec!["role", "department"]);
            assert_eq!(search_args.paging.page, 1);
            assert_eq!(search_args.paging.page_size, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_filter_conditions() {
        let args = EduDeskArgs::try_parse_from([
            "edudesk",
            "filter",
            "courses",
            "--where",
            "level=advanced",
            "-w",
            "instructor=Dr.",
        ])
        .unwrap();

        if let Command::Filter(filter_args) = args.command {
            assert_eq!(
                filter_args.conditions,
                vec![
                    ("level".to_string(), "advanced".to_string()),
                    ("instructor".to_string(), "Dr.".to_string()),
                ]
            );
        } else {
            panic!("Expected Filter command");
        }

        assert!(
            EduDeskArgs::try_parse_from(["edudesk", "filter", "courses", "--where", "level"])
                .is_err()
        );
    }

    #[test]
    fn test_global_options() {
        let args = EduDeskArgs::try_parse_from([
            "edudesk", "stats", "users", "--format", "json", "--pretty", "-vv",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_entity_aliases() {
        let args = EduDeskArgs::try_parse_from(["edudesk", "stats", "staff"]).unwrap();
        assert_eq!(args.command.entity(), EntityKind::Users);

        let args = EduDeskArgs::try_parse_from(["edudesk", "get", "Student", "4"]).unwrap();
        assert_eq!(args.command.entity(), EntityKind::Students);

        let err = EduDeskArgs::try_parse_from(["edudesk", "list", "fees"]).unwrap_err();
        assert!(err.to_string().contains("unknown entity type 'fees'"));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = EduDeskArgs::try_parse_from(["edudesk", "-q", "-vvv", "get", "users", "3"])
            .unwrap();
        assert_eq!(args.verbosity(), 0);
        assert!(matches!(args.command, Command::Get(GetArgs { id: 3, .. })));
    }

    #[test]
    fn test_parse_condition() {
        assert_eq!(
            parse_condition("email=@example.com").unwrap(),
            ("email".to_string(), "@example.com".to_string())
        );
        assert_eq!(
            parse_condition("notes=a=b").unwrap(),
            ("notes".to_string(), "a=b".to_string())
        );
        assert!(parse_condition("=x").is_err());
        assert!(parse_condition("status").is_err());
    }
}
