use crate::info::ParsedInfo;

pub const MIN_RECOMMENDED_REDIS_MAJOR_VERSION: u32 = 6;

/// Fires when the server runs a major version older than
/// [`MIN_RECOMMENDED_REDIS_MAJOR_VERSION`].
///
/// Only the major component of `server.redis_version` is compared, so `5.0.14`
/// fires and `6.0.0` does not. Versions that do not start with a number, such as
/// `unstable`, do not fire.
pub fn redis_version(info: &ParsedInfo) -> bool {
    info.get_path("server.redis_version")
        .and_then(|version| version.split('.').next())
        .and_then(|major| major.parse::<u32>().ok())
        .is_some_and(|major| major < MIN_RECOMMENDED_REDIS_MAJOR_VERSION)
}
