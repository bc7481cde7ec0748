/// Light suffix-stripping heuristic for English word variants.
///
/// Exactly one rule applies per word, checked in order: `ing`, `ed`,
/// `ies` (restores `y`), `y` (becomes `i`), `s`. The `ies` rule runs
/// before `y`/`s` so that it is reachable: `worries` stems to `worry`,
/// not `worrie`.
pub fn stem(word: &str) -> String {
    if let Some(base) = word.strip_suffix("ing") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("ed") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("ies") {
        return format!("{base}y");
    }
    if let Some(base) = word.strip_suffix('y') {
        return format!("{base}i");
    }
    if let Some(base) = word.strip_suffix('s') {
        return base.to_string();
    }
    word.to_string()
}
