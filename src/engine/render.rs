//! Render snapshot — nodes and deduplicated links decorated with highlight
//! colors from the last query.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::LinkSet;
use crate::types::UserGraph;

use super::context::{QueryContext, QueryResult};

/// Highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Query subject (endpoints, the searched user).
    Red,
    /// Query result (suggested users, path interior, the found link).
    Orange,
}

/// A user as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A relation as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLink {
    pub source: u64,
    pub target: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Everything a visualization needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub links: Vec<RenderLink>,
}

impl RenderGraph {
    /// Find a rendered node by ID.
    pub fn node(&self, id: u64) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a rendered link in either orientation.
    pub fn link(&self, a: u64, b: u64) -> Option<&RenderLink> {
        self.links
            .iter()
            .find(|l| (l.source == a && l.target == b) || (l.source == b && l.target == a))
    }
}

/// Build a render snapshot of `graph`, highlighted according to `ctx`.
pub fn render(graph: &UserGraph, ctx: &QueryContext) -> RenderGraph {
    let path_members: HashSet<u64> = match ctx.result() {
        Some(QueryResult::Path { path, .. }) => path.iter().copied().collect(),
        _ => HashSet::new(),
    };

    let mut nodes = Vec::with_capacity(graph.len());
    let mut links = LinkSet::new();
    graph.for_each(|user, neighbors| {
        nodes.push(RenderNode {
            id: user.id,
            name: user.title().to_string(),
            color: node_color(ctx.result(), &path_members, user.id),
        });
        for neighbor in neighbors {
            links.insert(user.id, neighbor.id);
        }
    });

    let links = links
        .into_links()
        .into_iter()
        .map(|(source, target)| RenderLink {
            source,
            target,
            color: link_color(ctx.result(), &path_members, source, target),
        })
        .collect();

    RenderGraph { nodes, links }
}

fn node_color(result: Option<&QueryResult>, path_members: &HashSet<u64>, id: u64) -> Option<Color> {
    match result? {
        QueryResult::Node { key } => (*key == id).then_some(Color::Red),
        QueryResult::Edge { source, target } => {
            (*source == id || *target == id).then_some(Color::Red)
        }
        QueryResult::Path { source, target, .. } => {
            if *source == id || *target == id {
                Some(Color::Red)
            } else if path_members.contains(&id) {
                Some(Color::Orange)
            } else {
                None
            }
        }
        QueryResult::Suggestions { key, suggested } => {
            if *key == id {
                Some(Color::Red)
            } else if suggested.contains(&id) {
                Some(Color::Orange)
            } else {
                None
            }
        }
    }
}

fn link_color(
    result: Option<&QueryResult>,
    path_members: &HashSet<u64>,
    a: u64,
    b: u64,
) -> Option<Color> {
    match result? {
        QueryResult::Edge { source, target } => {
            let hit = (*source == a && *target == b) || (*source == b && *target == a);
            hit.then_some(Color::Orange)
        }
        QueryResult::Path { .. } => {
            (path_members.contains(&a) && path_members.contains(&b)).then_some(Color::Orange)
        }
        _ => None,
    }
}
