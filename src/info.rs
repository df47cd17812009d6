//! Parsing of the `INFO` command reply.
//!
//! The reply is plain text made of `# Section` headers followed by `field:value`
//! lines:
//!
//! ```text
//! # Server
//! redis_version:7.2.4
//!
//! # Memory
//! used_memory:1048576
//! number_of_cached_scripts:3
//! ```
//!
//! Parsing never fails. Anything that does not look like a header or a field
//! inside a section is skipped, so malformed input degrades to an empty
//! [`ParsedInfo`].

use std::collections::BTreeMap;

pub type InfoSection = BTreeMap<String, String>;

/// Snapshot of one `INFO` reply, keyed by lower-cased section name and then by
/// field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInfo {
    sections: BTreeMap<String, InfoSection>,
}

impl ParsedInfo {
    pub fn section(&self, name: &str) -> Option<&InfoSection> {
        self.sections.get(&name.to_lowercase())
    }

    pub fn get(&self, section: &str, field: &str) -> Option<&str> {
        self.section(section)?.get(field).map(String::as_str)
    }

    /// Looks a field up by its dotted path, e.g. `memory.number_of_cached_scripts`.
    pub fn get_path(&self, path: &str) -> Option<&str> {
        let (section, field) = path.split_once('.')?;
        self.get(section, field)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &InfoSection)> {
        self.sections
            .iter()
            .map(|(name, fields)| (name.as_str(), fields))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

pub fn parse_info(reply: &str) -> ParsedInfo {
    let mut sections: BTreeMap<String, InfoSection> = BTreeMap::new();
    let mut current_section: Option<String> = None;

    for line in reply.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('#') {
            let name = header.trim().to_lowercase();
            current_section = (!name.is_empty()).then_some(name);
            continue;
        }

        let Some(section) = &current_section else {
            continue;
        };

        if let Some((field, value)) = line.split_once(':') {
            sections
                .entry(section.clone())
                .or_default()
                .insert(field.trim().to_string(), value.trim().to_string());
        }
    }

    ParsedInfo { sections }
}

/// Splits values such as `keys=1,expires=0,avg_ttl=0` into their parts.
///
/// Entries without an `=` are skipped.
pub fn parse_field_list(value: &str) -> BTreeMap<String, String> {
    value
        .split(',')
        .filter_map(|entry| entry.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
