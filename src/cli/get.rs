use debar::core::DebarResult;
use debar::package::{collect_closure, FetchReport};
use debar::report::format_size;
use debar::repository::Repository;
use debar::resolver::ResolvedPackage;
use std::path::Path;

pub async fn run(dir: &Path, package: &str, suggests: bool) -> DebarResult<()> {
    let mut repo = Repository::open(dir)?;
    run_with(&mut repo, package, suggests).await
}

pub async fn run_with(repo: &mut Repository, package: &str, suggests: bool) -> DebarResult<()> {
    let resolved = repo.resolve(package)?;
    print!("{}", format_plan(&resolved, suggests));

    let report = repo.fetch_resolved(&resolved, suggests).await?;
    print_report(&report);
    report.into_result().map(|_| ())
}

/// Packages about to be downloaded, root first, with their total size
fn format_plan(resolved: &ResolvedPackage, suggests: bool) -> String {
    let graph = resolved.graph();
    let closure = collect_closure(graph, resolved.root(), suggests);
    let total: u64 = closure.iter().map(|&id| graph[id].size).sum();

    let mut out = String::from("Packages to download:\n");
    for &id in &closure {
        let record = &graph[id];
        out.push_str(&format!(
            "  {} {} ({})\n",
            record.name,
            record.version,
            format_size(record.size)
        ));
    }
    out.push_str(&format!(
        "All {} packages, total size {}.\n\n",
        closure.len(),
        format_size(total)
    ));
    out
}

fn print_report(report: &FetchReport) {
    for (name, error) in &report.failed {
        eprintln!("✗ {}: {}", name, error);
    }
    if let Some(first) = report.fetched.first() {
        let dir = first
            .path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!(
            "✓ Downloaded {} packages ({}) into {}",
            report.fetched.len(),
            format_size(report.fetched_size()),
            dir
        );
    }
}
