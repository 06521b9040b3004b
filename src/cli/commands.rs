//! Command implementations for the EduDesk CLI.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::entity::generator::{generate_courses, generate_students, generate_users};
use crate::entity::{EntityKind, load_records};
use crate::error::{EduDeskError, Result};
use crate::manager::{DataManager, ManagerConfig};
use crate::pagination::Page;
use crate::query::SearchFilters;
use crate::record::Record;

/// Execute a CLI command.
pub fn execute_command(args: EduDeskArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command.entity() {
        EntityKind::Students => run(&args, config, generate_students),
        EntityKind::Users => run(&args, config, generate_users),
        EntityKind::Courses => run(&args, config, generate_courses),
    }
}

/// Load a manager configuration, or the default one when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ManagerConfig> {
    let Some(path) = path else {
        return Ok(ManagerConfig::default());
    };

    debug!("loading configuration from {}", path.display());
    let text = fs::read_to_string(path)?;
    let config: ManagerConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Build the manager for one entity type and run the command against it.
fn run<T>(args: &EduDeskArgs, config: ManagerConfig, generate: fn() -> Vec<T>) -> Result<()>
where
    T: Record + Serialize + DeserializeOwned,
{
    let records = match &args.data {
        Some(path) => {
            info!("loading {} from {}", args.command.entity(), path.display());
            load_records(path)?
        }
        None => generate(),
    };
    let mut manager = DataManager::with_config(records, config)?;
    info!("{} {} loaded", manager.size(), args.command.entity());

    match &args.command {
        Command::List(list_args) => {
            let result = list_records(&manager, list_args);
            output_result("Records", &result, args)
        }
        Command::Get(get_args) => {
            let record = get_record(&manager, get_args)?;
            output_result("Record", &record, args)
        }
        Command::Search(search_args) => {
            let result = search_records(&mut manager, search_args);
            output_result("Search results", &result, args)
        }
        Command::Filter(filter_args) => {
            let result = filter_records(&mut manager, filter_args);
            output_result("Filtered records", &result, args)
        }
        Command::Stats(stats_args) => {
            let report = show_stats(&mut manager, stats_args);
            output_result("Statistics", &report, args)
        }
    }
}

/// Sort (if requested) and slice the requested page.
fn page_records<T: Record>(
    manager: &DataManager<T>,
    items: Vec<T>,
    paging: &PageArgs,
) -> Page<T> {
    let items = match &paging.sort {
        Some(field) => manager.sort(&items, field, paging.order),
        None => items,
    };
    let page_size = paging
        .page_size
        .unwrap_or(manager.config().default_page_size);
    manager.paginate(&items, paging.page, page_size)
}

/// List records.
pub fn list_records<T: Record>(manager: &DataManager<T>, args: &ListArgs) -> RecordPage<T> {
    RecordPage {
        entity: args.entity,
        query: None,
        page: page_records(manager, manager.get_all(), &args.paging),
    }
}

/// Show one record.
pub fn get_record<T: Record>(manager: &DataManager<T>, args: &GetArgs) -> Result<T> {
    manager.get_by_id(args.id).ok_or_else(|| {
        EduDeskError::not_found(format!("{} record with id {}", args.entity, args.id))
    })
}

/// Search records.
pub fn search_records<T: Record>(
    manager: &mut DataManager<T>,
    args: &SearchArgs,
) -> RecordPage<T> {
    let hits = manager.search(&args.query, &args.fields);
    debug!("search {:?} matched {} records", args.query, hits.len());

    RecordPage {
        entity: args.entity,
        query: Some(args.query.clone()),
        page: page_records(manager, hits, &args.paging),
    }
}

/// Filter records by field substrings and an optional free-text term.
pub fn filter_records<T: Record>(
    manager: &mut DataManager<T>,
    args: &FilterArgs,
) -> RecordPage<T> {
    let mut filters = SearchFilters::new();
    filters.set_filters(args.conditions.iter().cloned());
    if let Some(term) = &args.term {
        filters.set_term(term.as_str());
    }

    let fields = if args.fields.is_empty() {
        manager.config().default_search_fields.clone()
    } else {
        args.fields.clone()
    };

    let key = format!("filters:{:?}:{:?}:{fields:?}", filters.term(), filters.filters());
    let matched = manager.filter(|record| filters.matches(record, &fields), Some(key.as_str()));
    debug!("filter {key} matched {} records", matched.len());

    RecordPage {
        entity: args.entity,
        query: args.term.clone(),
        page: page_records(manager, matched, &args.paging),
    }
}

/// Dashboard statistics.
pub fn show_stats<T: Record>(
    manager: &mut DataManager<T>,
    args: &StatsArgs,
) -> StatsReport<T::Summary> {
    let stats = manager.stats();
    let cache = args.cache.then(|| {
        let (search, filter) = manager.cache_stats();
        CacheReport { search, filter }
    });

    StatsReport {
        entity: args.entity,
        stats,
        cache,
    }
}
