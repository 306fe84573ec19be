use clap::{Parser, ValueEnum};
use itertools::Itertools;
use journey_prefill::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// Inspect prefill sources for the forms of a workflow graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow graph JSON file
    graph_path: Option<String>,

    /// Only report this node instead of every form node
    #[arg(short, long)]
    node: Option<String>,

    /// JSON file replacing the built-in global source catalogue
    #[arg(short, long)]
    globals: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Bind a field of the selected node: FIELD=[TYPE:]SOURCE_ID:SOURCE_FIELD (repeatable, requires --node)
    #[arg(short, long = "bind", value_name = "BINDING")]
    bindings: Vec<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct NodeReport<'a> {
    node_id: &'a str,
    name: &'a str,
    fields: Vec<FieldDescriptor>,
    sources: Vec<PrefillSource>,
}

#[derive(Serialize)]
struct Report<'a> {
    nodes: Vec<NodeReport<'a>>,
    prefill: &'a PrefillConfigMap,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.globals.as_deref());
    } else {
        run_non_interactive(cli);
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_inputs(graph_path: &str, globals_path: Option<&str>) -> (BlueprintGraph, SourceAggregator) {
    let load_start = Instant::now();
    let graph = load_blueprint_file(graph_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)));

    let mut builder = SourceAggregator::builder();
    if let Some(path) = globals_path {
        let catalogue = GlobalCatalogue::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load global catalogue: {}", e))
        });
        builder = builder.with_global_catalogue(catalogue);
    }

    info!(
        path = graph_path,
        nodes = graph.nodes.len(),
        forms = graph.forms.len(),
        elapsed = ?load_start.elapsed(),
        "loaded workflow graph"
    );
    (graph, builder.build())
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let graph_path = cli.graph_path.unwrap_or_else(|| {
        exit_with_error("Graph path is required in non-interactive mode.");
    });
    if !cli.bindings.is_empty() && cli.node.is_none() {
        exit_with_error("--bind requires --node to select the form being configured.");
    }

    let (graph, aggregator) = load_inputs(&graph_path, cli.globals.as_deref());

    let targets: Vec<&Node> = match &cli.node {
        Some(node_id) => match graph.find_node_by_id(node_id) {
            Some(node) => vec![node],
            None => exit_with_error(&format!("Node '{}' not found in graph", node_id)),
        },
        None => graph.form_nodes(),
    };

    let mut prefill = PrefillConfigMap::new();
    if let Some(node_id) = &cli.node {
        let sources = aggregator.all_data_sources(node_id, &graph);
        for binding in &cli.bindings {
            let (field_id, choice) =
                parse_binding(binding).unwrap_or_else(|message| exit_with_error(&message));
            let config = resolve_choice(&sources, node_id, &choice)
                .unwrap_or_else(|message| exit_with_error(&message));
            prefill.set_prefill_for_field(node_id, field_id, Some(config));
        }
    }

    let reports = build_reports(&graph, &aggregator, &targets);
    match cli.format {
        OutputFormat::Json => {
            let report = Report {
                nodes: reports,
                prefill: &prefill,
            };
            let json = serde_json::to_string_pretty(&report)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
            println!("{}", json);
        }
        OutputFormat::Text => print_reports(&graph, &reports, &prefill),
    }
}

/// Resolves fields and sources for each target. Targets without a form are omitted.
fn build_reports<'a>(
    graph: &'a BlueprintGraph,
    aggregator: &SourceAggregator,
    targets: &[&'a Node],
) -> Vec<NodeReport<'a>> {
    targets
        .iter()
        .copied()
        .filter_map(|node| {
            let Some(form) = graph.find_form_by_component_key(&node.id) else {
                info!(node_id = node.id.as_str(), "node has no form, skipping");
                return None;
            };
            Some(NodeReport {
                node_id: &node.id,
                name: &node.data.name,
                fields: form.fields(),
                sources: aggregator.all_data_sources(&node.id, graph),
            })
        })
        .collect()
}

fn print_reports(graph: &BlueprintGraph, reports: &[NodeReport<'_>], prefill: &PrefillConfigMap) {
    for report in reports {
        println!("\n=== {} ({}) ===", report.name, report.node_id);
        println!("Fields:");
        for field in &report.fields {
            let marker = if field.required { "*" } else { " " };
            match prefill.prefill_for_field(report.node_id, &field.id) {
                Some(config) => println!(
                    "  {} {} [{}] <- {}",
                    marker,
                    field.name,
                    field.field_type,
                    SourceFormatter::describe_binding(graph, config)
                ),
                None => println!("  {} {} [{}]", marker, field.name, field.field_type),
            }
        }
        println!("\nPrefill Sources:");
        println!("{}", SourceFormatter::format_sources(&report.sources));
    }
    println!();
}

/// A picked source field, with the source type when it was spelled out.
#[derive(Debug, PartialEq)]
struct SourceChoice<'a> {
    source_type: Option<PrefillSourceType>,
    source_id: &'a str,
    field_id: &'a str,
}

/// Splits `FIELD=[TYPE:]SOURCE_ID:SOURCE_FIELD`.
fn parse_binding(binding: &str) -> std::result::Result<(&str, SourceChoice<'_>), String> {
    let invalid = || {
        format!(
            "Invalid binding '{}', expected FIELD=[TYPE:]SOURCE_ID:SOURCE_FIELD",
            binding
        )
    };
    let (field_id, source) = binding.split_once('=').ok_or_else(invalid)?;
    let choice = parse_source_choice(source).ok_or_else(invalid)?;
    if field_id.is_empty() {
        return Err(invalid());
    }
    Ok((field_id, choice))
}

/// Splits `[TYPE:]SOURCE_ID:SOURCE_FIELD`. A leading segment only counts as a
/// type when it names one.
fn parse_source_choice(choice: &str) -> Option<SourceChoice<'_>> {
    let (source, field_id) = choice.rsplit_once(':')?;
    let (source_type, source_id) = match source.split_once(':') {
        Some((prefix, rest)) => match PrefillSourceType::from_name(prefix) {
            Some(source_type) => (Some(source_type), rest),
            None => (None, source),
        },
        None => (None, source),
    };
    if source_id.is_empty() || field_id.is_empty() {
        return None;
    }
    Some(SourceChoice {
        source_type,
        source_id,
        field_id,
    })
}

/// Turns a choice into a binding, inferring the source type when the id is unambiguous.
fn resolve_choice(
    sources: &[PrefillSource],
    node_id: &str,
    choice: &SourceChoice<'_>,
) -> std::result::Result<PrefillConfig, String> {
    let source_type = match choice.source_type {
        Some(source_type) => source_type,
        None => {
            let candidates: Vec<PrefillSourceType> = sources
                .iter()
                .filter(|source| source.id == choice.source_id)
                .map(|source| source.source_type)
                .unique()
                .collect();
            match candidates.as_slice() {
                [source_type] => *source_type,
                [] => {
                    return Err(format!(
                        "Source '{}' is not available to node '{}'",
                        choice.source_id, node_id
                    ));
                }
                _ => {
                    return Err(format!(
                        "Source '{}' is ambiguous for node '{}', prefix it with one of: {}",
                        choice.source_id,
                        node_id,
                        candidates.iter().join(", ")
                    ));
                }
            }
        }
    };
    select_source_field(sources, source_type, choice.source_id, choice.field_id).ok_or_else(|| {
        format!(
            "Source '{}:{}' is not available to node '{}'",
            source_type, choice.source_id, node_id
        )
    })
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(globals_path: Option<&str>) {
    println!("--- Prefill Interactive Mode ---");

    let graph_path = prompt_for_input("Enter workflow graph path", Some("data/graph.json"));
    let (graph, aggregator) = load_inputs(&graph_path, globals_path);

    let form_nodes = graph.form_nodes();
    if form_nodes.is_empty() {
        exit_with_error("The graph has no form nodes.");
    }

    let mut prefill = PrefillConfigMap::new();
    loop {
        println!("\nForms:");
        for (index, node) in form_nodes.iter().enumerate() {
            println!("  {}: {}", index + 1, node.data.name);
        }
        let Some(node) = prompt_for_choice("Select a form (empty to finish)", &form_nodes) else {
            break;
        };
        let Some(form) = graph.find_form_by_component_key(&node.id) else {
            println!("Form not found");
            continue;
        };

        let fields = form.fields();
        println!("\nFields of {}:", node.data.name);
        for (index, field) in fields.iter().enumerate() {
            let binding = prefill
                .prefill_for_field(&node.id, &field.id)
                .map(|config| format!(" <- {}", SourceFormatter::describe_binding(&graph, config)))
                .unwrap_or_default();
            println!("  {}: {}{}", index + 1, field.name, binding);
        }
        let Some(field) = prompt_for_choice("Select a field to prefill", &fields) else {
            continue;
        };

        let sources = aggregator.all_data_sources(&node.id, &graph);
        println!("\n{}", SourceFormatter::format_sources(&sources));
        let choice = prompt_for_input("Enter [TYPE:]SOURCE_ID:SOURCE_FIELD (or 'clear')", None);
        if choice == "clear" {
            prefill.clear_prefill_for_field(&node.id, &field.id);
            continue;
        }
        let Some(choice) = parse_source_choice(&choice) else {
            println!("Invalid choice. Expected a source id and field from the list.");
            continue;
        };
        match resolve_choice(&sources, &node.id, &choice) {
            Ok(config) => prefill.set_prefill_for_field(&node.id, &field.id, Some(config)),
            Err(message) => println!("{}", message),
        }
    }

    match serde_json::to_string_pretty(&prefill) {
        Ok(json) => println!("\nPrefill configuration:\n{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize prefill configuration: {}", e)),
    }
}

/// Prompts for a 1-based index into `items`; `None` on empty input.
fn prompt_for_choice<'a, T>(prompt_text: &str, items: &'a [T]) -> Option<&'a T> {
    loop {
        let choice = prompt_for_input(prompt_text, None);
        if choice.is_empty() {
            return None;
        }
        match choice.parse::<usize>() {
            Ok(index) if (1..=items.len()).contains(&index) => return items.get(index - 1),
            _ => println!("Invalid choice. Please enter 1 to {}.", items.len()),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
