use debar::core::DebarResult;
use debar::report::mermaid;
use debar::repository::Repository;
use std::path::Path;

pub fn run(dir: &Path, package: &str, suggests: bool) -> DebarResult<()> {
    let mut repo = Repository::open(dir)?;
    run_with(&mut repo, package, suggests)
}

pub fn run_with(repo: &mut Repository, package: &str, suggests: bool) -> DebarResult<()> {
    let resolved = repo.resolve(package)?;
    print!(
        "{}",
        mermaid::render(resolved.graph(), resolved.root(), suggests)
    );
    Ok(())
}
