//! CLI command implementations.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::{render, QueryContext, QueryEngine};
use crate::generator::{generate_random_graph, RandomGraphParams};
use crate::types::{GraphData, GraphResult, UserData, UserGraph};

/// Which query to highlight when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Plain snapshot.
    None,
    /// A single user.
    Node(u64),
    /// A relation between two users.
    Edge(u64, u64),
    /// A shortest path between two users.
    Path(u64, u64),
    /// Suggested connections for a user.
    Suggestions(u64),
}

fn load_graph(path: &Path) -> GraphResult<UserGraph> {
    Ok(GraphData::read_from_file(path)?.to_graph())
}

fn user_json(user: &UserData) -> serde_json::Value {
    serde_json::json!({"id": user.id, "name": user.name})
}

fn print_json(value: &serde_json::Value, pretty: bool) -> GraphResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

/// Display summary statistics for a seed file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    let node_count = graph.len();
    let edge_count = graph.edge_count();
    let max_degree = graph.nodes().map(|n| n.degree()).max().unwrap_or(0);
    let isolated = graph.nodes().filter(|n| n.degree() == 0).count();
    let avg_degree = if node_count > 0 {
        2.0 * edge_count as f64 / node_count as f64
    } else {
        0.0
    };

    if json {
        print_json(
            &serde_json::json!({
                "file": path.display().to_string(),
                "nodes": node_count,
                "edges": edge_count,
                "avg_degree": avg_degree,
                "max_degree": max_degree,
                "isolated": isolated,
            }),
            false,
        )?;
    } else {
        println!("File: {}", path.display());
        println!("Users: {}", node_count);
        println!("Relations: {}", edge_count);
        println!("Avg relations per user: {:.2}", avg_degree);
        println!("Max relations per user: {}", max_degree);
        println!("Users without relations: {}", isolated);
    }
    Ok(())
}

/// Look up a user by ID.
pub fn cmd_find(path: &Path, id: u64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut ctx = QueryContext::new();
    let user = QueryEngine::new().find_node(&graph, &mut ctx, id)?;

    if json {
        let mut neighbors: Vec<u64> = graph
            .neighbors(&id)
            .map(|it| it.copied().collect())
            .unwrap_or_default();
        neighbors.sort_unstable();
        print_json(
            &serde_json::json!({"id": user.id, "name": user.name, "neighbors": neighbors}),
            false,
        )?;
    } else {
        let degree = graph.node(&id).map(|n| n.degree()).unwrap_or(0);
        println!("User {}: {} ({} relations)", user.id, user.title(), degree);
    }
    Ok(())
}

/// Check whether two users are related.
pub fn cmd_edge(path: &Path, source: u64, target: u64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut ctx = QueryContext::new();
    QueryEngine::new().find_edge(&graph, &mut ctx, source, target)?;

    if json {
        print_json(
            &serde_json::json!({"source": source, "target": target, "exists": true}),
            false,
        )?;
    } else {
        println!("Relation {} - {} exists", source, target);
    }
    Ok(())
}

/// Print a shortest path between two users.
pub fn cmd_path(path: &Path, source: u64, target: u64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut ctx = QueryContext::new();
    let keys = QueryEngine::new().load_path(&graph, &mut ctx, source, target)?;
    let users: Vec<&UserData> = keys.iter().filter_map(|k| graph.find_node(k)).collect();

    if json {
        let path_json: Vec<serde_json::Value> = users.iter().map(|u| user_json(u)).collect();
        print_json(
            &serde_json::json!({
                "source": source,
                "target": target,
                "hops": keys.len() - 1,
                "path": path_json,
            }),
            false,
        )?;
    } else {
        let names: Vec<String> = users
            .iter()
            .map(|u| format!("{} ({})", u.title(), u.id))
            .collect();
        println!("{}", names.join(" -> "));
        println!("{} hops", keys.len() - 1);
    }
    Ok(())
}

/// Print mutual-connection suggestions for a user.
pub fn cmd_suggest(path: &Path, id: u64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut ctx = QueryContext::new();
    let keys = QueryEngine::new().load_suggestions(&graph, &mut ctx, id)?;
    let users: Vec<&UserData> = keys.iter().filter_map(|k| graph.find_node(k)).collect();

    if json {
        let list: Vec<serde_json::Value> = users.iter().map(|u| user_json(u)).collect();
        print_json(&serde_json::json!({"id": id, "suggestions": list}), false)?;
    } else {
        println!("Suggestions for {}:", id);
        for user in users {
            println!("  {} ({})", user.title(), user.id);
        }
    }
    Ok(())
}

/// Export a seed file as a deduplicated snapshot.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    println!("{}", GraphData::from_graph(&graph).to_json(pretty)?);
    Ok(())
}

/// Generate a random graph and print it in seed format.
pub fn cmd_generate(params: RandomGraphParams, seed: Option<u64>, pretty: bool) -> GraphResult<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_random_graph(params, &mut rng);
    println!("{}", GraphData::from_graph(&graph).to_json(pretty)?);
    Ok(())
}

/// Print the render snapshot, highlighted by one query.
pub fn cmd_render(path: &Path, highlight: Highlight, pretty: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let engine = QueryEngine::new();
    let mut ctx = QueryContext::new();

    match highlight {
        Highlight::None => {}
        Highlight::Node(id) => {
            engine.find_node(&graph, &mut ctx, id)?;
        }
        Highlight::Edge(source, target) => engine.find_edge(&graph, &mut ctx, source, target)?,
        Highlight::Path(source, target) => {
            engine.load_path(&graph, &mut ctx, source, target)?;
        }
        Highlight::Suggestions(id) => {
            engine.load_suggestions(&graph, &mut ctx, id)?;
        }
    }

    let snapshot = render(&graph, &ctx);
    let value = serde_json::to_value(&snapshot)?;
    print_json(&value, pretty)?;
    Ok(())
}
