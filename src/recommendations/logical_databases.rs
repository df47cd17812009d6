use crate::info::{parse_field_list, ParsedInfo};

/// Fires when keys are spread over more than one logical database.
///
/// The keyspace section lists one `dbN:keys=..,expires=..` line per database
/// that holds data; entries reporting zero keys are not counted.
pub fn logical_databases(info: &ParsedInfo) -> bool {
    let Some(keyspace) = info.section("keyspace") else {
        return false;
    };

    let databases_with_keys = keyspace
        .iter()
        .filter(|(name, _)| is_database_name(name))
        .filter(|(_, value)| {
            parse_field_list(value)
                .get("keys")
                .and_then(|keys| keys.parse::<u64>().ok())
                .is_some_and(|keys| keys > 0)
        })
        .count();

    databases_with_keys > 1
}

fn is_database_name(name: &str) -> bool {
    name.strip_prefix("db")
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}
