use crate::info::ParsedInfo;

pub const BIG_AMOUNT_OF_CONNECTED_CLIENTS: u64 = 100;

/// Fires when more than [`BIG_AMOUNT_OF_CONNECTED_CLIENTS`] clients are connected.
///
/// Reads `clients.connected_clients`; a missing or non-numeric value does not fire.
pub fn connected_clients(info: &ParsedInfo) -> bool {
    info.get_path("clients.connected_clients")
        .and_then(|value| value.parse::<u64>().ok())
        .is_some_and(|connected| connected > BIG_AMOUNT_OF_CONNECTED_CLIENTS)
}
