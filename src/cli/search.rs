use debar::core::DebarResult;
use debar::package::PackageRecord;
use debar::repository::Repository;
use std::path::Path;

pub fn run(dir: &Path, text: &str) -> DebarResult<()> {
    let repo = Repository::open(dir)?;
    run_with(&repo, text)
}

pub fn run_with(repo: &Repository, text: &str) -> DebarResult<()> {
    let results = repo.search_by_substring(text)?;
    if results.is_empty() {
        println!("No packages match '{}'", text);
        return Ok(());
    }

    print!("{}", format_results(&results));
    println!("\n{} packages found", results.len());
    Ok(())
}

fn format_results(results: &[PackageRecord]) -> String {
    let width = results.iter().map(|r| r.name.len()).max().unwrap_or(0);
    results
        .iter()
        .map(|r| {
            format!(
                "{:<width$}  {:<20}  {}\n",
                r.name,
                r.version,
                r.description,
                width = width
            )
        })
        .collect()
}
