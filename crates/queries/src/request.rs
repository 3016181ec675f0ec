//! JSON-RPC request encoding and the block windowing policies shared by the generators.

use alloy_primitives::U64;
use serde_json::{json, Value};

/// JSON-RPC protocol version sent with every request.
pub(crate) const JSONRPC_VERSION: &str = "2.0";

/// How many recent blocks count as "the last minute" with ~12s block times.
const RECENT_BLOCKS: u64 = 5;

/// Width of the window old blocks are picked from.
const ARCHIVE_SPAN: u64 = 100;

/// Minimum age of an archive block, keeping it outside any likely reorg window.
const ARCHIVE_DEPTH: u64 = 200;

/// How far back a log query may start, roughly one day of blocks.
const LOG_SPAN: u64 = 5000;

/// Number of leading transactions assumed to exist in any block.
const TX_INDEX_SPAN: u64 = 5;

/// Reduces a signed random draw into `[0, span)`.
#[inline]
pub(crate) const fn window(r: i64, span: u64) -> u64 {
    r.unsigned_abs() % span
}

/// Picks a block within the last ~minute: `current - (r mod 5)`.
pub fn recent_block(current: u64, r: i64) -> u64 {
    current.saturating_sub(window(r, RECENT_BLOCKS))
}

/// Picks a block old enough to only be served from archive state:
/// `current - (r mod 100) - 200`.
pub fn archive_block(current: u64, r: i64) -> u64 {
    current.saturating_sub(window(r, ARCHIVE_SPAN)).saturating_sub(ARCHIVE_DEPTH)
}

/// Returns the `(fromBlock, toBlock)` range of a log query.
///
/// Both bounds come from the same draw, so the range always ends within the last few blocks and
/// starts up to a day earlier.
pub fn log_block_range(current: u64, r: i64) -> (u64, u64) {
    (current.saturating_sub(window(r, LOG_SPAN)), recent_block(current, r))
}

/// Picks one of the first few transaction positions in a block.
pub fn tx_index(r: i64) -> u64 {
    window(r, TX_INDEX_SPAN)
}

/// Hex encoded quantity, e.g. `0x1b4`.
#[inline]
pub(crate) fn quantity(value: u64) -> Value {
    json!(U64::from(value))
}

/// Renders a newline terminated JSON-RPC request.
///
/// `params` is omitted entirely when `None`.
pub(crate) fn encode(id: i64, method: &str, params: Option<Value>) -> String {
    let mut request = json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "method": method,
    });
    if let (Some(params), Some(object)) = (params, request.as_object_mut()) {
        object.insert("params".to_string(), params);
    }

    let mut line = request.to_string();
    line.push('\n');
    line
}
