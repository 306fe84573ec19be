use clap::Parser;
use indexmap::IndexMap;
use journey_prefill::blueprint::{
    BlueprintGraph, Edge, FieldSchema, Form, FormField, Node, NodeData, Position, SlaDuration,
};
use journey_prefill::graph::FORM_NODE_TYPE;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random workflow graphs for the prefill resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of layers; nodes only depend on nodes in earlier layers
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// The minimum number of form nodes per layer
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of form nodes per layer
    #[arg(long, default_value_t = 3)]
    max: usize,

    /// Probability that a node's form is left out of the graph
    #[arg(long, default_value_t = 0.0)]
    formless: f64,

    /// Add a prerequisite from the first node back to the last one
    #[arg(long)]
    cycle: bool,
}

/// Field pool: (id, title, avantos_type, json type, format)
const FIELD_POOL: &[(&str, &str, &str, &str, Option<&str>)] = &[
    ("email", "Email", "short-text", "string", Some("email")),
    ("name", "Name", "short-text", "string", None),
    ("id", "ID", "short-text", "string", None),
    ("notes", "Notes", "multi-line-text", "string", None),
    ("dynamic_checkbox_group", "Dynamic Checkbox Group", "checkbox-group", "array", None),
    ("dynamic_object", "Dynamic Object", "object-enum", "object", None),
    ("multi_select", "Multi Select", "multi-select", "array", None),
    ("button", "Button", "button", "object", None),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.formless) {
        eprintln!("Error: --formless must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating workflow graph ({} layers, {} to {} forms per layer)...",
        cli.layers, cli.min, cli.max
    );

    let mut graph = BlueprintGraph {
        id: "bp_generated".to_string(),
        tenant_id: "1".to_string(),
        name: "Generated Blueprint".to_string(),
        description: "Randomly generated workflow graph".to_string(),
        category: "Category 1".to_string(),
        ..Default::default()
    };

    let mut layers: Vec<Vec<String>> = Vec::with_capacity(cli.layers);
    for layer in 0..cli.layers {
        let count = rng.random_range(cli.min..=cli.max);
        let mut layer_ids = Vec::with_capacity(count);

        for slot in 0..count {
            let index = graph.nodes.len();
            let node_id = format!("form-{:04}", index);
            let form_id = format!("f_{:04}", index);
            let upstream: Vec<&String> = layers.iter().flatten().collect();
            let prerequisites = pick_prerequisites(&mut rng, &upstream);

            for prerequisite in &prerequisites {
                graph.edges.push(Edge {
                    source: prerequisite.clone(),
                    target: node_id.clone(),
                });
            }
            graph.nodes.push(generate_node(
                &node_id,
                &form_id,
                &format!("Form {}", index + 1),
                prerequisites,
                Position {
                    x: 300.0 * layer as f64,
                    y: 150.0 * slot as f64,
                },
            ));
            if !rng.random_bool(cli.formless) {
                graph.forms.push(generate_form(&mut rng, &form_id));
            }
            layer_ids.push(node_id);
        }

        println!("-> Generated layer {} with {} node(s).", layer, count);
        layers.push(layer_ids);
    }

    if cli.cycle && graph.nodes.len() > 1 {
        let last_id = graph.nodes[graph.nodes.len() - 1].id.clone();
        graph.nodes[0].data.prerequisites.push(last_id);
        println!("-> Added a back-reference from the first node to the last.");
    }

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} nodes and {} forms to '{}'",
        graph.nodes.len(),
        graph.forms.len(),
        cli.output
    );

    Ok(())
}

/// Picks up to three distinct prerequisites from the upstream nodes.
fn pick_prerequisites(rng: &mut ThreadRng, upstream: &[&String]) -> Vec<String> {
    if upstream.is_empty() {
        return Vec::new();
    }
    let count = rng.random_range(1..=upstream.len().min(3));
    let mut picked: Vec<String> = Vec::with_capacity(count);
    while picked.len() < count {
        let candidate = upstream[rng.random_range(0..upstream.len())];
        if !picked.contains(candidate) {
            picked.push(candidate.clone());
        }
    }
    picked
}

fn generate_node(
    node_id: &str,
    form_id: &str,
    name: &str,
    prerequisites: Vec<String>,
    position: Position,
) -> Node {
    Node {
        id: node_id.to_string(),
        node_type: FORM_NODE_TYPE.to_string(),
        position,
        data: NodeData {
            id: format!("bp_c-{}", node_id),
            component_key: node_id.to_string(),
            component_type: FORM_NODE_TYPE.to_string(),
            component_id: form_id.to_string(),
            name: name.to_string(),
            prerequisites,
            sla_duration: SlaDuration {
                number: 0.0,
                unit: "minutes".to_string(),
            },
            ..Default::default()
        },
    }
}

fn generate_form(rng: &mut ThreadRng, form_id: &str) -> Form {
    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for (id, title, avantos_type, json_type, format) in FIELD_POOL {
        if !rng.random_bool(0.6) {
            continue;
        }
        properties.insert(
            id.to_string(),
            FormField {
                avantos_type: avantos_type.to_string(),
                title: title.to_string(),
                field_type: json_type.to_string(),
                format: format.map(str::to_string),
                ..Default::default()
            },
        );
        if rng.random_bool(0.3) {
            required.push(id.to_string());
        }
    }

    Form {
        id: form_id.to_string(),
        name: "test form".to_string(),
        description: "generated form".to_string(),
        is_reusable: false,
        field_schema: Some(FieldSchema {
            schema_type: "object".to_string(),
            properties,
            required,
        }),
        ..Default::default()
    }
}
