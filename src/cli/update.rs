use debar::core::DebarResult;
use debar::repository::Repository;
use std::path::Path;

pub async fn run(dir: &Path) -> DebarResult<()> {
    let mut repo = Repository::open(dir)?;
    run_with(&mut repo).await
}

pub async fn run_with(repo: &mut Repository) -> DebarResult<()> {
    println!("Updating package index...");

    let summary = repo.rebuild_index().await?;
    for (component, count) in &summary.components {
        println!("  {:<12} {} packages", component, count);
    }
    println!(
        "\n✓ Indexed {} packages from {} components",
        summary.total_packages(),
        summary.components.len()
    );

    Ok(())
}
