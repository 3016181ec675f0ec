//! Every function here renders exactly one request for the method it is named after, reading
//! whatever it needs from the [`State`]. None of them can fail.

use crate::{
    request::{archive_block, encode, log_block_range, quantity, recent_block, tx_index, window},
    State,
};
use serde_json::{json, Map, Value};

const CALL_TRACER: &str = "callTracer";

/// Renders a request without parameters.
fn bare(state: &dyn State, method: &str) -> String {
    encode(state.id(), method, None)
}

/// Renders a request with the given positional parameters.
fn with_params(state: &dyn State, method: &str, params: Value) -> String {
    encode(state.id(), method, Some(params))
}

/// Shared body of `eth_call` and `eth_estimateGas`.
///
/// The call is replayed against the block before the one it was observed in, the state it was
/// executed on. Querying the inclusion block itself collides with the call's own effects.
fn call_like(state: &dyn State, method: &str) -> String {
    let call = state.random_call();

    let mut tx = Map::new();
    if let Some(to) = call.recipient() {
        tx.insert("to".to_string(), json!(to));
    }
    tx.insert("from".to_string(), json!(call.from));
    tx.insert("data".to_string(), json!(call.input));

    with_params(state, method, json!([tx, quantity(call.block.saturating_sub(1))]))
}

/// `eth_call` of a recently observed call.
pub fn eth_call(state: &dyn State) -> String {
    call_like(state, "eth_call")
}

/// `eth_estimateGas` of a recently observed call.
pub fn eth_estimate_gas(state: &dyn State) -> String {
    call_like(state, "eth_estimateGas")
}

/// `eth_getTransactionReceipt` of a recent transaction.
pub fn eth_get_transaction_receipt(state: &dyn State) -> String {
    let tx = state.random_transaction();
    with_params(state, "eth_getTransactionReceipt", json!([tx]))
}

/// `eth_getTransactionByHash` of a recent transaction.
pub fn eth_get_transaction_by_hash(state: &dyn State) -> String {
    let tx = state.random_transaction();
    with_params(state, "eth_getTransactionByHash", json!([tx]))
}

/// `eth_getBalance` at `latest`.
pub fn eth_get_balance(state: &dyn State) -> String {
    let address = state.random_address();
    with_params(state, "eth_getBalance", json!([address, "latest"]))
}

/// `eth_getBalance` at a block only an archive node still has state for.
pub fn eth_get_balance_archive(state: &dyn State) -> String {
    let address = state.random_address();
    let block = archive_block(state.current_block(), state.rand_i64());
    with_params(state, "eth_getBalance", json!([address, quantity(block)]))
}

fn block_by_number(state: &dyn State, full: bool) -> String {
    let block = recent_block(state.current_block(), state.rand_i64());
    with_params(state, "eth_getBlockByNumber", json!([quantity(block), full]))
}

/// `eth_getBlockByNumber` of a recent block, transaction hashes only.
pub fn eth_get_block_by_number(state: &dyn State) -> String {
    block_by_number(state, false)
}

/// `eth_getBlockByNumber` of a recent block, full transaction objects.
pub fn eth_get_block_by_number_full(state: &dyn State) -> String {
    block_by_number(state, true)
}

fn block_by_hash(state: &dyn State, full: bool) -> String {
    let hash = state.random_block();
    with_params(state, "eth_getBlockByHash", json!([hash, full]))
}

/// `eth_getBlockByHash`, transaction hashes only.
pub fn eth_get_block_by_hash(state: &dyn State) -> String {
    block_by_hash(state, false)
}

/// `eth_getBlockByHash`, full transaction objects.
pub fn eth_get_block_by_hash_full(state: &dyn State) -> String {
    block_by_hash(state, true)
}

/// `eth_getTransactionCount` at `pending`.
pub fn eth_get_transaction_count(state: &dyn State) -> String {
    let address = state.random_address();
    with_params(state, "eth_getTransactionCount", json!([address, "pending"]))
}

/// `eth_getLogs` of a contract over a range ending in the last few blocks.
pub fn eth_get_logs(state: &dyn State) -> String {
    // TODO: favour recent blocks on a curve instead of uniformly over the day
    let (from_block, to_block) = log_block_range(state.current_block(), state.rand_i64());
    let contract = state.random_contract();
    let filter = json!({
        "fromBlock": quantity(from_block),
        "toBlock": quantity(to_block),
        "address": contract.address,
        "topics": contract.topics,
    });
    with_params(state, "eth_getLogs", json!([filter]))
}

/// `eth_getCode` of a contract at `latest`.
pub fn eth_get_code(state: &dyn State) -> String {
    let contract = state.random_contract();
    with_params(state, "eth_getCode", json!([contract.address, "latest"]))
}

/// `eth_getStorageAt` of slot zero at `latest`.
pub fn eth_get_storage_at(state: &dyn State) -> String {
    let address = state.random_address();
    with_params(state, "eth_getStorageAt", json!([address, "0x0", "latest"]))
}

/// `eth_getTransactionByBlockNumberAndIndex` of an archive block.
pub fn eth_get_transaction_by_block_number_and_index(state: &dyn State) -> String {
    let r = state.rand_i64();
    let block = archive_block(state.current_block(), r);
    with_params(
        state,
        "eth_getTransactionByBlockNumberAndIndex",
        json!([quantity(block), quantity(tx_index(r))]),
    )
}

/// `eth_getTransactionByBlockHashAndIndex` of a recent block.
pub fn eth_get_transaction_by_block_hash_and_index(state: &dyn State) -> String {
    let r = state.rand_i64();
    let hash = state.random_block();
    with_params(
        state,
        "eth_getTransactionByBlockHashAndIndex",
        json!([hash, quantity(tx_index(r))]),
    )
}

/// `eth_getBlockTransactionCountByHash` of a recent block.
pub fn eth_get_block_transaction_count_by_hash(state: &dyn State) -> String {
    let hash = state.random_block();
    with_params(state, "eth_getBlockTransactionCountByHash", json!([hash]))
}

/// `eth_getBlockTransactionCountByNumber` of one of the last hundred blocks.
pub fn eth_get_block_transaction_count_by_number(state: &dyn State) -> String {
    let block = state.current_block().saturating_sub(window(state.rand_i64(), 100));
    with_params(state, "eth_getBlockTransactionCountByNumber", json!([quantity(block)]))
}

/// `eth_getBlockReceipts` of the latest block.
pub fn eth_get_block_receipts(state: &dyn State) -> String {
    with_params(state, "eth_getBlockReceipts", json!(["latest"]))
}

/// `eth_feeHistory` over up to ten blocks without reward percentiles.
pub fn eth_fee_history(state: &dyn State) -> String {
    let block_count = window(state.rand_i64(), 10);
    with_params(state, "eth_feeHistory", json!([block_count, "latest", []]))
}

/// `eth_blockNumber`
pub fn eth_block_number(state: &dyn State) -> String {
    bare(state, "eth_blockNumber")
}

/// `eth_chainId`
pub fn eth_chain_id(state: &dyn State) -> String {
    bare(state, "eth_chainId")
}

/// `eth_gasPrice`
pub fn eth_gas_price(state: &dyn State) -> String {
    bare(state, "eth_gasPrice")
}

/// `eth_maxPriorityFeePerGas`
pub fn eth_max_priority_fee_per_gas(state: &dyn State) -> String {
    bare(state, "eth_maxPriorityFeePerGas")
}

/// `eth_syncing`
pub fn eth_syncing(state: &dyn State) -> String {
    bare(state, "eth_syncing")
}

/// `eth_accounts`, deprecated by some clients but still seen in the wild.
pub fn eth_accounts(state: &dyn State) -> String {
    bare(state, "eth_accounts")
}

/// `eth_protocolVersion`
pub fn eth_protocol_version(state: &dyn State) -> String {
    bare(state, "eth_protocolVersion")
}

/// `net_version`
pub fn net_version(state: &dyn State) -> String {
    bare(state, "net_version")
}

/// `net_listening`
pub fn net_listening(state: &dyn State) -> String {
    bare(state, "net_listening")
}

/// `net_peerCount`
pub fn net_peer_count(state: &dyn State) -> String {
    bare(state, "net_peerCount")
}

/// `trace_block` of the latest block.
pub fn trace_block(state: &dyn State) -> String {
    with_params(state, "trace_block", json!(["latest"]))
}

/// `trace_transaction` of a recent transaction.
pub fn trace_transaction(state: &dyn State) -> String {
    let tx = state.random_transaction();
    with_params(state, "trace_transaction", json!([tx]))
}

/// `trace_replayTransaction` of a recent transaction with the `trace` tracer.
pub fn trace_replay_transaction(state: &dyn State) -> String {
    let tx = state.random_transaction();
    with_params(state, "trace_replayTransaction", json!([tx, ["trace"]]))
}

/// `trace_replayBlockTransactions` of the latest block with the `trace` tracer.
pub fn trace_replay_block_transactions(state: &dyn State) -> String {
    with_params(state, "trace_replayBlockTransactions", json!(["latest", ["trace"]]))
}

/// `debug_traceTransaction` of a recent transaction with the call tracer.
pub fn debug_trace_transaction(state: &dyn State) -> String {
    let tx = state.random_transaction();
    with_params(state, "debug_traceTransaction", json!([tx, { "tracer": CALL_TRACER }]))
}

/// `debug_traceBlockByNumber` of the latest block with the call tracer.
pub fn debug_trace_block_by_number(state: &dyn State) -> String {
    with_params(state, "debug_traceBlockByNumber", json!(["latest", { "tracer": CALL_TRACER }]))
}

/// `debug_traceBlockByHash` of a recent block with the call tracer.
pub fn debug_trace_block_by_hash(state: &dyn State) -> String {
    let hash = state.random_block();
    with_params(state, "debug_traceBlockByHash", json!([hash, { "tracer": CALL_TRACER }]))
}
