use crate::package::collect_closure;
use crate::resolver::{NodeId, PackageGraph};
use std::collections::HashSet;

/// Render the dependency graph below `root` as a Mermaid flowchart
///
/// Node ids are derived from graph indices because package names such as
/// `libstdc++6` are not valid Mermaid identifiers. The root is drawn as a
/// hexagon. Every distinct edge is written once, so cycles terminate.
pub fn render(graph: &PackageGraph, root: NodeId, include_suggests: bool) -> String {
    let mut out = String::from("flowchart TD\n");

    for id in collect_closure(graph, root, include_suggests) {
        let name = &graph[id].name;
        if id == root {
            out.push_str(&format!("  {}{{{{\"{}\"}}}}\n", node_id(id), name));
        } else {
            out.push_str(&format!("  {}[\"{}\"]\n", node_id(id), name));
        }
    }

    let mut printed = HashSet::new();
    write_edges(graph, root, include_suggests, &mut printed, &mut out);
    out
}

fn node_id(id: NodeId) -> String {
    format!("p{}", id.index())
}

fn write_edges(
    graph: &PackageGraph,
    from: NodeId,
    include_suggests: bool,
    printed: &mut HashSet<(NodeId, NodeId, bool)>,
    out: &mut String,
) {
    let record = &graph[from];
    let depends = record.depends.iter().map(|&to| (to, false));
    let suggests = record
        .suggests
        .iter()
        .filter(|_| include_suggests)
        .map(|&to| (to, true));

    for (to, suggested) in depends.chain(suggests) {
        if !printed.insert((from, to, suggested)) {
            continue;
        }
        let arrow = if suggested { "-.->" } else { "-->" };
        out.push_str(&format!("  {} {} {}\n", node_id(from), arrow, node_id(to)));
        write_edges(graph, to, include_suggests, printed, out);
    }
}
