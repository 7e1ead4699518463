use debar::core::DebarResult;
use debar::report::format_size;
use debar::repository::Repository;
use debar::resolver::PackageSummary;
use std::path::Path;

pub fn run(dir: &Path, package: &str, json: bool) -> DebarResult<()> {
    let mut repo = Repository::open(dir)?;
    run_with(&mut repo, package, json)
}

pub fn run_with(repo: &mut Repository, package: &str, json: bool) -> DebarResult<()> {
    let summary = repo.resolve(package)?.summary();

    if json {
        let output = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{}", output);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}

fn format_summary(summary: &PackageSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Package:     {}\n", summary.name));
    out.push_str(&format!("Version:     {}\n", summary.version));
    out.push_str(&format!("Component:   {}\n", summary.component));
    out.push_str(&format!("Filename:    {}\n", summary.filename));
    out.push_str(&format!("Size:        {}\n", format_size(summary.size)));
    out.push_str(&format!("Checksum:    {}\n", summary.checksum));
    out.push_str(&format!("Description: {}\n", summary.description));
    out.push_str(&format!("Depends:     {}\n", list_or_none(&summary.depends)));
    out.push_str(&format!("Suggests:    {}\n", list_or_none(&summary.suggests)));
    if summary.cyclic {
        out.push_str(&format!(
            "\nNote: {} is part of a dependency cycle\n",
            summary.name
        ));
    }
    out
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
