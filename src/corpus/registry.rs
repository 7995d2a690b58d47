use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

/// One license from the SPDX `licenses.json` registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub spdx_id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub identifiers: Vec<String>,
    pub urls: Vec<String>,
}

// Wire shape of a registry item; every list is optional.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    identifiers: Vec<RawIdentifier>,
    #[serde(default)]
    links: Vec<RawLink>,
    #[serde(default)]
    text: Vec<RawLink>,
    #[serde(default)]
    other_names: Vec<RawName>,
}

#[derive(Debug, Deserialize)]
struct RawIdentifier {
    identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    name: Option<String>,
}

/// Read and parse the registry document. Failing here is fatal for start-up.
pub fn load_registry(path: &Path) -> Result<Vec<RegistryEntry>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::RegistryRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_registry(&content).map_err(|source| LoadError::RegistryParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a registry JSON array. Entries without an `id` are dropped.
pub fn parse_registry(content: &str) -> Result<Vec<RegistryEntry>, serde_json::Error> {
    let raw: Vec<RawEntry> = serde_json::from_str(content)?;

    let entries = raw
        .into_iter()
        .filter_map(|item| {
            let spdx_id = item.id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())?;
            let urls = item
                .links
                .into_iter()
                .chain(item.text)
                .filter_map(|l| non_empty(l.url))
                .collect();

            Some(RegistryEntry {
                spdx_id,
                name: item.name.map(|n| n.trim().to_string()).unwrap_or_default(),
                aliases: item
                    .other_names
                    .into_iter()
                    .filter_map(|n| non_empty(n.name))
                    .collect(),
                identifiers: item
                    .identifiers
                    .into_iter()
                    .filter_map(|i| non_empty(i.identifier))
                    .collect(),
                urls,
            })
        })
        .collect();

    Ok(entries)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
