/// Normalises a route path for lookup.
///
/// Anything after a `?` or a nested `#` is dropped, a leading `/` is added when
/// missing and trailing slashes are collapsed on every path but the root.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.starts_with('/') {
        true => trimmed.to_string(),
        false => format!("/{trimmed}"),
    }
}

/// Extracts the route path from a URL hash fragment, `#/pie` becomes `/pie`.
pub fn path_from_hash(hash: &str) -> String {
    normalize_path(hash.strip_prefix('#').unwrap_or(hash))
}

pub fn hash_from_path(path: &str) -> String {
    format!("#{}", normalize_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_fragments_map_to_paths() {
        assert_eq!(path_from_hash("#/progress"), "/progress");
        assert_eq!(path_from_hash("#/pie"), "/pie");
        assert_eq!(path_from_hash("#/"), "/");
    }

    #[test]
    fn empty_hash_is_root() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
    }

    #[test]
    fn query_and_trailing_slash_are_ignored() {
        assert_eq!(path_from_hash("#/pie/?slices=3"), "/pie");
        assert_eq!(normalize_path("progress//"), "/progress");
        assert_eq!(normalize_path("/progress#anchor"), "/progress");
    }

    #[test]
    fn paths_format_as_hash() {
        assert_eq!(hash_from_path("/pie"), "#/pie");
        assert_eq!(hash_from_path("pie/"), "#/pie");
        assert_eq!(hash_from_path(""), "#/");
    }
}
