//! `fieldsel` command line: list field types, print fragments and list queries.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use fieldsel_core::{FieldSelectionRegistry, ItemQuery, ListSchema};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("fieldsel")
        .version(fieldsel_core::VERSION)
        .about("GraphQL selection fragments for admin field types")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("types").about("List registered field types"))
        .subcommand(
            Command::new("select")
                .about("Print the selection fragment for one field")
                .arg(
                    Arg::new("type")
                        .required(true)
                        .help("Field type tag, e.g. image"),
                )
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("Field path, e.g. avatar"),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Print the items query for lists in a schema file")
                .arg(
                    Arg::new("schema")
                        .long("schema")
                        .short('s')
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Schema file (.yaml, .yml, .toml or .json)"),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .short('l')
                        .help("Only print the query for this list"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn types(registry: &FieldSelectionRegistry) -> String {
    registry.field_types().collect::<Vec<_>>().join("\n")
}

fn select(registry: &FieldSelectionRegistry, args: &ArgMatches) -> Result<String> {
    let field_type = args
        .get_one::<String>("type")
        .context("missing field type")?;
    let path = args.get_one::<String>("path").context("missing path")?;
    let fragment = registry.selection_for(field_type, path.as_str())?;
    Ok(fragment.to_string())
}

fn query(registry: &FieldSelectionRegistry, args: &ArgMatches) -> Result<String> {
    let schema_path = args
        .get_one::<PathBuf>("schema")
        .context("missing schema path")?;
    let schema = ListSchema::from_path(schema_path)
        .with_context(|| format!("failed to load {}", schema_path.display()))?;

    let lists = match args.get_one::<String>("list") {
        Some(key) => vec![schema.list(key)?],
        None => schema.lists.iter().collect(),
    };

    let mut out = Vec::with_capacity(lists.len());
    for list in lists {
        let query = ItemQuery::new(registry, list, &schema.query)
            .with_context(|| format!("failed to compose query for list '{}'", list.key))?;
        out.push(format!("# {}\n{query}", list.key));
    }
    Ok(out.join("\n\n"))
}

fn run(matches: &ArgMatches) -> Result<String> {
    let registry = FieldSelectionRegistry::global();
    match matches.subcommand() {
        Some(("types", _)) => Ok(types(registry)),
        Some(("select", args)) => select(registry, args),
        Some(("query", args)) => query(registry, args),
        _ => anyhow::bail!("no command given"),
    }
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
