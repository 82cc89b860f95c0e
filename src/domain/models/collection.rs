use serde::{Deserialize, Serialize};

/// Response body of `GET /collections`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionsResponse {
    pub collections: Vec<String>,
}

/// Which collections the user may pick.
///
/// Holds the reserved collection name; every write to the active selection
/// goes through `guard`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPolicy {
    reserved: Option<String>,
}

impl CollectionPolicy {
    pub fn new(reserved: Option<String>) -> Self {
        Self { reserved }
    }

    pub fn is_selectable(&self, name: &str) -> bool {
        self.reserved.as_deref() != Some(name)
    }

    /// Collections shown as filter buttons, backend order preserved
    pub fn visible(&self, collections: &[String]) -> Vec<String> {
        collections
            .iter()
            .filter(|name| self.is_selectable(name))
            .cloned()
            .collect()
    }

    /// Default selection after a load: first selectable entry, or "all"
    pub fn default_selection(&self, collections: &[String]) -> Option<String> {
        collections
            .iter()
            .find(|name| self.is_selectable(name))
            .cloned()
    }

    /// Reserved name collapses to "all"
    pub fn guard(&self, selection: Option<String>) -> Option<String> {
        selection.filter(|name| self.is_selectable(name))
    }
}

/// Button label: first character upper-cased
pub fn collection_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// BEM modifier for the colour badge of a collection
pub fn collection_badge_modifier(name: &str) -> &'static str {
    match name {
        "slack" => "slack",
        "docs" => "docs",
        "codebase" => "codebase",
        "global" => "global",
        _ => "default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn slack_policy() -> CollectionPolicy {
        CollectionPolicy::new(Some("slack".to_string()))
    }

    #[test]
    fn test_visible_excludes_reserved() {
        let visible = slack_policy().visible(&names(&["slack", "docs", "codebase"]));
        assert_eq!(visible, names(&["docs", "codebase"]));
    }

    #[test]
    fn test_default_skips_reserved() {
        let policy = slack_policy();
        assert_eq!(
            policy.default_selection(&names(&["slack", "docs", "global"])),
            Some("docs".to_string())
        );
        assert_eq!(
            policy.default_selection(&names(&["global", "docs"])),
            Some("global".to_string())
        );
    }

    #[test]
    fn test_default_is_all_when_nothing_selectable() {
        let policy = slack_policy();
        assert_eq!(policy.default_selection(&[]), None);
        assert_eq!(policy.default_selection(&names(&["slack"])), None);
    }

    #[test]
    fn test_guard_resets_reserved() {
        let policy = slack_policy();
        assert_eq!(policy.guard(Some("slack".to_string())), None);
        assert_eq!(policy.guard(Some("docs".to_string())), Some("docs".to_string()));
        assert_eq!(policy.guard(None), None);
    }

    #[test]
    fn test_policy_without_reserved_allows_everything() {
        let policy = CollectionPolicy::default();
        assert!(policy.is_selectable("slack"));
        assert_eq!(policy.visible(&names(&["slack"])), names(&["slack"]));
    }

    #[test]
    fn test_collection_label() {
        assert_eq!(collection_label("docs"), "Docs");
        assert_eq!(collection_label("codebase"), "Codebase");
        assert_eq!(collection_label(""), "");
        assert_eq!(collection_label("état"), "État");
    }

    #[test]
    fn test_badge_modifier_falls_back() {
        assert_eq!(collection_badge_modifier("docs"), "docs");
        assert_eq!(collection_badge_modifier("wiki"), "default");
    }

    #[test]
    fn test_collections_response_shape() {
        let parsed: CollectionsResponse =
            serde_json::from_str(r#"{"collections":["docs","slack"]}"#).unwrap();
        assert_eq!(parsed.collections, names(&["docs", "slack"]));
    }
}
