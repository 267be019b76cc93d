// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{BulbError, Result};

/// Mapping from a friendly group name to the bulb host addresses it controls.
///
/// Hosts within a group keep the order they were written in; the control loop
/// visits them in that order. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct GroupTable {
    groups: BTreeMap<String, Vec<String>>,
}

/// On-disk shape of a `--groups` override file.
#[derive(Debug, Deserialize)]
struct GroupsFile {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupTable {
    /// The built-in local network table.
    pub fn builtin() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(
            "decke".to_string(),
            vec![
                "192.168.0.87".to_string(),
                "192.168.0.171".to_string(),
                "192.168.0.52".to_string(),
                "192.168.0.115".to_string(),
            ],
        );
        groups.insert("bogenlampe".to_string(), vec!["192.168.0.143".to_string()]);
        Self { groups }
    }

    /// Parse a group table from TOML text:
    ///
    /// ```toml
    /// [groups]
    /// decke = ["192.168.0.87", "192.168.0.171"]
    /// ```
    ///
    /// A group with no hosts or a blank host entry is rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: GroupsFile =
            toml::from_str(text).map_err(|e| BulbError::InvalidGroupsFile {
                reason: e.to_string(),
            })?;
        for (name, hosts) in &file.groups {
            if hosts.is_empty() {
                return Err(BulbError::InvalidGroupsFile {
                    reason: format!("group '{name}' has no hosts"),
                });
            }
            if hosts.iter().any(|h| h.trim().is_empty()) {
                return Err(BulbError::InvalidGroupsFile {
                    reason: format!("group '{name}' contains a blank host"),
                });
            }
        }
        Ok(Self {
            groups: file.groups,
        })
    }

    /// Look up the hosts of a group.
    pub fn resolve(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Like [`resolve`](Self::resolve), but an unknown name is an error that
    /// lists the known group names.
    pub fn hosts_for(&self, name: &str) -> Result<&[String]> {
        self.resolve(name).ok_or_else(|| BulbError::UnknownGroup {
            name: name.to_string(),
            known: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Known group names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
