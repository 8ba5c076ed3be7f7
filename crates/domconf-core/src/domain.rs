//! Domain table parsing
//!
//! The descriptor declares alias groups in its `domain` key and, optionally,
//! the personal identifiers of each alias under a key named after the alias:
//!
//! ```text
//! domain = acme:acme.example.com,foo:foo.example.net
//! acme   = sales,eng
//! ```
//!
//! This expands to one default mapping per alias plus one mapping per
//! personal identifier, in declaration order:
//!
//! | profile      | full domain              | host               |
//! |--------------|--------------------------|--------------------|
//! | `default`    | `acme.example.com`       | `acme.example.com` |
//! | `acme_sales` | `sales.acme.example.com` | `acme.example.com` |
//! | `acme_eng`   | `eng.acme.example.com`   | `acme.example.com` |
//! | `default`    | `foo.example.net`        | `foo.example.net`  |

use crate::descriptor::{DOMAIN_KEY, EnvironmentDescriptor};
use crate::{Error, Result};

/// One `alias:host` declaration together with its personal identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasGroup {
    pub alias: String,
    pub host: String,
    pub personal_ids: Vec<String>,
}

impl AliasGroup {
    /// Profile name for a personal identifier of this alias.
    pub fn personal_profile(&self, personal_id: &str) -> String {
        format!("{}_{}", self.alias, personal_id)
    }

    /// Fully qualified domain for a personal identifier of this alias.
    pub fn personal_domain(&self, personal_id: &str) -> String {
        format!("{}.{}", personal_id, self.host)
    }
}

/// Parse the descriptor's domain table into alias groups, in declaration
/// order.
///
/// An alias without its own descriptor key has no personal identifiers.
pub fn alias_groups(descriptor: &EnvironmentDescriptor) -> Result<Vec<AliasGroup>> {
    let declared = descriptor.get(DOMAIN_KEY)?;
    let mut groups = Vec::new();

    for entry in domain_entries(declared) {
        let (alias, host) = split_pair(entry)?;
        let personal_ids = if descriptor.has(alias) {
            list_items(descriptor.get(alias)?)
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };
        groups.push(AliasGroup {
            alias: alias.to_string(),
            host: host.to_string(),
            personal_ids,
        });
    }

    Ok(groups)
}

/// Trimmed pairs of the `domain` list.
///
/// Trailing empty segments are dropped; an empty segment anywhere else is
/// kept and later rejected as a malformed pair.
fn domain_entries(value: &str) -> Vec<&str> {
    let mut entries: Vec<&str> = value.split(',').map(str::trim).collect();
    while entries.last().is_some_and(|entry| entry.is_empty()) {
        entries.pop();
    }
    entries
}

/// Non-empty, trimmed items of a comma-separated list.
fn list_items(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn split_pair(entry: &str) -> Result<(&str, &str)> {
    let mut parts = entry.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(alias), Some(host), None) if !alias.trim().is_empty() && !host.trim().is_empty() => {
            Ok((alias.trim(), host.trim()))
        }
        _ => Err(Error::MalformedDomainEntry {
            entry: entry.to_string(),
        }),
    }
}

/// A single row of the domain table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainMapping {
    /// `default`, or `<alias>_<personal id>`.
    pub profile_name: String,
    /// The domain a recipient must carry to select this row.
    pub full_domain_name: String,
    /// Host suffix of the alias group.
    pub domain_name: String,
}

impl DomainMapping {
    /// Case-insensitive comparison against a recipient's domain suffix.
    pub fn matches(&self, domain: &str) -> bool {
        self.full_domain_name.eq_ignore_ascii_case(domain)
            || self
                .full_domain_name
                .chars()
                .flat_map(char::to_lowercase)
                .eq(domain.chars().flat_map(char::to_lowercase))
    }
}

/// The ordered domain table consulted by profile-name resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTable {
    mappings: Vec<DomainMapping>,
}

impl DomainTable {
    /// Expand the descriptor's domain table.
    ///
    /// Personal rows are added for every declared identifier, whether or not a
    /// backing profile exists.
    pub fn build(descriptor: &EnvironmentDescriptor, default_profile: &str) -> Result<Self> {
        let mut mappings = Vec::new();

        for group in alias_groups(descriptor)? {
            mappings.push(DomainMapping {
                profile_name: default_profile.to_string(),
                full_domain_name: group.host.clone(),
                domain_name: group.host.clone(),
            });
            for id in &group.personal_ids {
                mappings.push(DomainMapping {
                    profile_name: group.personal_profile(id),
                    full_domain_name: group.personal_domain(id),
                    domain_name: group.host.clone(),
                });
            }
        }

        tracing::info!(mappings = mappings.len(), "Built domain table");
        Ok(Self { mappings })
    }

    /// First row, in declaration order, matching `domain`.
    pub fn find(&self, domain: &str) -> Option<&DomainMapping> {
        self.mappings.iter().find(|m| m.matches(domain))
    }

    pub fn mappings(&self) -> &[DomainMapping] {
        &self.mappings
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domconf_store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn descriptor(entries: &[(&str, &str)]) -> EnvironmentDescriptor {
        let store = MemoryStore::new().with_profile("env", entries.iter().copied());
        EnvironmentDescriptor::load(&store, "env").unwrap()
    }

    fn row(profile: &str, full: &str, host: &str) -> DomainMapping {
        DomainMapping {
            profile_name: profile.into(),
            full_domain_name: full.into(),
            domain_name: host.into(),
        }
    }

    #[test]
    fn test_expansion_order() {
        let env = descriptor(&[
            ("domain", "acme:acme.example.com,foo:foo.example.net"),
            ("acme", "sales,eng"),
        ]);
        let table = DomainTable::build(&env, "default").unwrap();

        assert_eq!(
            table.mappings(),
            &[
                row("default", "acme.example.com", "acme.example.com"),
                row("acme_sales", "sales.acme.example.com", "acme.example.com"),
                row("acme_eng", "eng.acme.example.com", "acme.example.com"),
                row("default", "foo.example.net", "foo.example.net"),
            ]
        );
    }

    #[test]
    fn test_default_rows_are_independent() {
        let env = descriptor(&[("domain", "a:a.example,b:b.example,c:c.example")]);
        let table = DomainTable::build(&env, "default").unwrap();

        let hosts: Vec<&str> = table.iter().map(|m| m.full_domain_name.as_str()).collect();
        assert_eq!(hosts, vec!["a.example", "b.example", "c.example"]);
    }

    #[test]
    fn test_whitespace_and_trailing_empty_segments() {
        let env = descriptor(&[
            ("domain", " acme : acme.example.com ,,"),
            ("acme", "sales, ,eng,"),
        ]);
        let groups = alias_groups(&env).unwrap();

        assert_eq!(
            groups,
            vec![AliasGroup {
                alias: "acme".into(),
                host: "acme.example.com".into(),
                personal_ids: vec!["sales".into(), "eng".into()],
            }]
        );
    }

    #[test]
    fn test_empty_pair_before_last_is_rejected() {
        for bad in ["a:a.example,,b:b.example", ",a:a.example", "a:a.example, ,b:b.example"] {
            let env = descriptor(&[("domain", bad)]);
            assert!(
                matches!(
                    DomainTable::build(&env, "default"),
                    Err(Error::MalformedDomainEntry { ref entry }) if entry.is_empty()
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_pairs() {
        for bad in ["acme", "acme:host:extra", ":host", "acme:", "acme:  "] {
            let env = descriptor(&[("domain", bad)]);
            assert!(
                matches!(DomainTable::build(&env, "default"), Err(Error::MalformedDomainEntry { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_missing_domain_key() {
        let env = descriptor(&[("acme", "sales")]);
        assert!(matches!(
            DomainTable::build(&env, "default"),
            Err(Error::MissingKey { ref key }) if key == "domain"
        ));
    }

    #[test]
    fn test_empty_domain_value() {
        let env = descriptor(&[("domain", "")]);
        assert!(DomainTable::build(&env, "default").unwrap().is_empty());
    }

    #[test]
    fn test_find_is_case_insensitive_and_first_wins() {
        let env = descriptor(&[
            ("domain", "one:shared.example,two:shared.example"),
            ("two", "x"),
        ]);
        let table = DomainTable::build(&env, "default").unwrap();

        let hit = table.find("SHARED.Example").unwrap();
        assert_eq!(hit, &table.mappings()[0]);
        assert_eq!(table.find("x.shared.example").unwrap().profile_name, "two_x");
        assert!(table.find("other.example").is_none());
    }

    #[test]
    fn test_matches_folds_non_ascii_case() {
        let mapping = row("default", "école.example", "école.example");
        assert!(mapping.matches("ÉCOLE.EXAMPLE"));
        assert!(mapping.matches("École.example"));
        assert!(!mapping.matches("ecole.example"));
    }

    #[test]
    fn test_custom_default_profile_name() {
        let env = descriptor(&[("domain", "acme:acme.example.com")]);
        let table = DomainTable::build(&env, "fallback").unwrap();
        assert_eq!(table.mappings()[0].profile_name, "fallback");
    }
}
