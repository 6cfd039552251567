//! Credential pool parsing.

use std::fmt;

/// Ordered set of upstream API keys available for rotation.
///
/// Every member is non-empty and trimmed. Duplicates are kept, which lets an
/// operator weight a key by listing it more than once.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Parse a comma-separated list of keys.
    ///
    /// `None`, the empty string, and lists made only of separators and
    /// whitespace all yield an empty pool.
    pub fn parse(raw: Option<&str>) -> Self {
        let keys = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect();
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

// Keys are secrets; only their count is printed.
impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("len", &self.keys.len())
            .finish()
    }
}

/// Shorten a credential for logs and metric labels.
///
/// Google keys share the `AIzaSy` prefix, so the tail is kept to tell them apart.
pub fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        let prefix: String = chars.iter().take(2).collect();
        return format!("{}...", prefix);
    }
    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let pool = CredentialPool::parse(Some(" k1 ,k2,, k3\t"));
        let keys: Vec<&str> = pool.iter().collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let pool = CredentialPool::parse(Some("a,a,b"));
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.iter().filter(|k| *k == "a").count(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(CredentialPool::parse(None).is_empty());
        assert!(CredentialPool::parse(Some("")).is_empty());
        assert!(CredentialPool::parse(Some("  ,  ,")).is_empty());
    }

    #[test]
    fn test_single_key_without_separator() {
        let pool = CredentialPool::parse(Some("only-key"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0), Some("only-key"));
        assert_eq!(pool.get(1), None);
    }

    #[test]
    fn test_debug_hides_keys() {
        let pool = CredentialPool::parse(Some("secret-value"));
        let printed = format!("{:?}", pool);
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("len: 1"));
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("AIzaSyABCDEFG"), "AIzaSy...DEFG");
        assert_eq!(mask("ab"), "ab...");
        assert_eq!(mask("short-key"), "sh...");
    }

    #[test]
    fn test_mask_distinguishes_keys_with_shared_prefix() {
        let a = mask("AIzaSyA1111111111111111111111111111111aaaa");
        let b = mask("AIzaSyB2222222222222222222222222222222bbbb");
        assert_ne!(a, b);
        assert!(!a.contains("1111111"));
    }
}
