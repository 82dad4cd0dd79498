/// Turn free-text tag input into the stored tag sequence.
///
/// Splits on commas and trims each token. Tokens that are empty after
/// trimming are dropped; duplicates and order are kept as submitted.
pub fn normalize_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
