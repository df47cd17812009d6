use tracing::warn;

use crate::info::ParsedInfo;

pub const MIN_NUMBER_OF_CACHED_SCRIPTS: u64 = 10;

/// Fires when fewer than [`MIN_NUMBER_OF_CACHED_SCRIPTS`] Lua scripts are cached.
///
/// A missing or non-numeric `memory.number_of_cached_scripts` counts as low.
///
/// # Arguments
///
/// * `info` - A parsed `INFO` reply that includes the memory section
///
/// # Returns
///
/// * `true` - For counts 0 through 9, and for a missing or non-numeric count
/// * `false` - For counts of 10 and above
///
/// ```
/// use redis_advisor::{info::parse_info, recommendations::lua_script};
///
/// assert!(lua_script(&parse_info("# Memory\r\nnumber_of_cached_scripts:9\r\n")));
/// assert!(!lua_script(&parse_info("# Memory\r\nnumber_of_cached_scripts:10\r\n")));
/// ```
pub fn lua_script(info: &ParsedInfo) -> bool {
    let Some(value) = info.get_path("memory.number_of_cached_scripts") else {
        warn!("number_of_cached_scripts missing from INFO memory section");
        return true;
    };

    match value.parse::<u64>() {
        Ok(number_of_cached_scripts) => MIN_NUMBER_OF_CACHED_SCRIPTS > number_of_cached_scripts,
        Err(_) => {
            warn!(value, "number_of_cached_scripts is not a number");
            true
        }
    }
}
