use debar::core::DebarResult;
use debar::repository::init_repository;
use std::path::Path;

pub fn run(dir: &Path) -> DebarResult<()> {
    let config = init_repository(dir)?;

    println!("✓ Initialized Debar work directory in {}", dir.display());
    println!("  Mirror:     {}", config.repo.url);
    println!("  Release:    {}", config.repo.release_name);
    println!("  Arch:       {}", config.repo.arch);
    println!("  Components: {}", config.repo.components.join(", "));
    println!("\nEdit config.yaml if needed, then run `debar update` to build the index.");

    Ok(())
}
