use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex =
        Regex::new(r"[^a-zA-Z0-9]+").expect("NON_ALPHANUMERIC_RUN should be compiled successfully");
}

/// Lowercase-hyphen form of `s`: every run of characters outside `[a-zA-Z0-9]` becomes a
/// single hyphen, and hyphens at either end are dropped.
pub fn kebabize(s: &str) -> String {
    NON_ALPHANUMERIC_RUN.replace_all(s.trim(), "-").trim_matches('-').to_lowercase()
}

/// First character of the domain, lowercased. Empty when there is no domain.
pub fn domain_char(domain: Option<&str>) -> String {
    domain.and_then(|d| d.chars().next()).map(|c| c.to_lowercase().collect()).unwrap_or_default()
}

/// `{kebab(base)}-{drn}{domain char}`, or an empty string when any piece is missing.
pub fn build_final_name(base: &str, drn: Option<&str>, domain: Option<&str>) -> String {
    let base = kebabize(base);
    let drn = drn.unwrap_or_default().trim();
    let domain_char = domain_char(domain);

    if base.is_empty() || drn.is_empty() || domain_char.is_empty() {
        return String::new();
    }

    format!("{base}-{drn}{domain_char}")
}

#[cfg(test)]
mod test {
    use super::{build_final_name, domain_char, kebabize};

    #[test]
    fn kebabize_replaces_runs_and_strips_edges() {
        assert_eq!(kebabize("  My Data__Lake!! "), "my-data-lake");
        assert_eq!(kebabize("--a---b--"), "a-b");
        assert_eq!(kebabize("Über Team"), "ber-team");
        assert_eq!(kebabize("!!!"), "");
        assert_eq!(kebabize(""), "");
    }

    #[test]
    fn domain_char_is_first_char_lowercased() {
        assert_eq!(domain_char(Some("Finance")), "f");
        assert_eq!(domain_char(Some("")), "");
        assert_eq!(domain_char(None), "");
    }

    #[test]
    fn final_name_joins_kebab_base_drn_and_domain_char() {
        assert_eq!(build_final_name("Data Lake", Some(" DRN001 "), Some("Engineering")), "data-lake-DRN001e");
    }

    #[test]
    fn final_name_is_empty_when_any_piece_is_missing() {
        assert_eq!(build_final_name("!!", Some("DRN001"), Some("Cloud")), "");
        assert_eq!(build_final_name("lake", Some("  "), Some("Cloud")), "");
        assert_eq!(build_final_name("lake", None, Some("Cloud")), "");
        assert_eq!(build_final_name("lake", Some("DRN001"), None), "");
    }
}
