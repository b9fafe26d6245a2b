//! Command handlers

use std::path::{Path, PathBuf};

use busplan_app::app::{import_employees, run_allocation, AllocationOptions, CachedEmployeeLookup};
use busplan_app::config::Config;
use busplan_app::export::export_allocation_to_excel;
use busplan_app::repository::{load_route_rules, open_employee_repo, open_route_detail_repo};
use busplan_domain::repository::EmployeeRepository;
use busplan_domain::service::{size_vehicle, RouteRules};
use busplan_infra::csv_loader::load_employees_from_csv;
use busplan_infra::persistence::{CsvEmployeeRepository, FileEmployeeRepository};
use busplan_infra::route_rules_loader::RouteRulesLoader;
use busplan_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_assignment, output_employees, output_report};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Allocate {
            employees,
            routes,
            rules,
            only_routes,
            xlsx,
        } => cmd_allocate(&config, employees, routes, rules, only_routes, xlsx, output_format),

        Commands::Import { file, dry_run } => cmd_import(&config, file, dry_run, output_format),

        Commands::Employees { route } => cmd_employees(&config, route, output_format),

        Commands::Size { headcount } => {
            output_assignment(output_format, headcount, &size_vehicle(headcount))
        }

        Commands::Rules { rules } => cmd_rules(&config, rules),

        Commands::Config {
            show,
            set_data_dir,
            set_routes,
            set_rules,
            set_output,
            set_cache_ttl,
            reset,
        } => cmd_config(
            show,
            set_data_dir,
            set_routes,
            set_rules,
            set_output,
            set_cache_ttl,
            reset,
        ),
    }
}

fn open_store(config: &Config) -> Result<FileEmployeeRepository> {
    let store = open_employee_repo(config)?;
    debug!(path = %store.store_path().display(), "opened employee store");
    Ok(store)
}

fn cmd_allocate(
    config: &Config,
    employees_csv: Option<PathBuf>,
    routes_csv: Option<PathBuf>,
    rules_path: Option<PathBuf>,
    only_routes: Vec<String>,
    xlsx: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let rules: RouteRules = load_route_rules(config, rules_path.as_deref())?;
    let route_details = open_route_detail_repo(config, routes_csv.as_deref())?;
    let options = AllocationOptions { routes: only_routes };

    let report = match employees_csv {
        Some(path) => {
            let source = CsvEmployeeRepository::new(path)?;
            run_allocation(&source, &route_details, &rules, &options)?
        }
        None => {
            let store = open_store(config)?;
            run_allocation(&store, &route_details, &rules, &options)?
        }
    };

    output_report(output_format, &report)?;

    if let Some(path) = xlsx {
        export_allocation_to_excel(&report, &path)?;
        eprintln!("Excel written to {}", path.display());
    }

    Ok(())
}

fn cmd_import(config: &Config, file: PathBuf, dry_run: bool, output_format: OutputFormat) -> Result<()> {
    let rows = load_employees_from_csv(&file)?;
    let store = open_store(config)?;
    let lookup = CachedEmployeeLookup::new(&store, config.cache_ttl());

    let summary = import_employees(&store, &lookup, &rows, dry_run)
        .map_err(|e| Error::Import(e.to_string()))?;

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn cmd_employees(config: &Config, route: Option<String>, output_format: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    let employees = match route {
        Some(ref code) => store.find_by_route(code),
        None => store.find_all()?,
    };
    output_employees(output_format, &employees)
}

fn cmd_rules(config: &Config, rules_path: Option<PathBuf>) -> Result<()> {
    print!("{}", effective_rules_toml(config, rules_path.as_deref())?);
    Ok(())
}

/// Rules that `allocate` would use with the same flags, rendered as TOML
fn effective_rules_toml(config: &Config, rules_path: Option<&Path>) -> Result<String> {
    let rules = load_route_rules(config, rules_path)?;
    RouteRulesLoader::to_toml(&rules)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_routes: Option<PathBuf>,
    set_rules: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_cache_ttl: Option<u64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(path) = set_routes {
        config.route_details_csv = Some(path);
        changed = true;
    }
    if let Some(path) = set_rules {
        RouteRulesLoader::load_from_file(&path)?;
        config.route_rules = Some(path);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(ttl) = set_cache_ttl {
        config.cache_ttl_secs = ttl;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
