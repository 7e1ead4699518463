/// Parse a `Depends`/`Suggests` value into one package name per group.
///
/// Groups are separated by `,`. Within a group only the first `|`
/// alternative is kept; its version constraint and any `:arch` qualifier
/// are dropped. Debar does not try later alternatives when the first one
/// cannot be resolved.
pub fn parse_relations(field: &str) -> Vec<String> {
    field.split(',').filter_map(first_candidate).collect()
}

fn first_candidate(group: &str) -> Option<String> {
    let candidate = group.split('|').next()?.trim();
    let name = candidate
        .split(|c: char| c.is_whitespace() || c == '(' || c == '[')
        .next()?;
    let name = name.split(':').next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
