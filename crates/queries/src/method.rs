use crate::{generators, Generator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use strum::{ParseError, VariantArray};

/// Every request shape the generator knows how to render.
///
/// Variants that share an RPC method and only differ in their parameters are told apart with a
/// `#` suffix, e.g. `eth_getBlockByNumber#full`. The suffix never reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
pub enum RpcMethod {
    /// `eth_call`
    EthCall,
    /// `eth_estimateGas`
    EthEstimateGas,
    /// `eth_getTransactionReceipt`
    EthGetTransactionReceipt,
    /// `eth_getTransactionByHash`
    EthGetTransactionByHash,
    /// `eth_getBalance`
    EthGetBalance,
    /// `eth_getBalance#archive`
    EthGetBalanceArchive,
    /// `eth_getBlockByNumber`
    EthGetBlockByNumber,
    /// `eth_getBlockByNumber#full`
    EthGetBlockByNumberFull,
    /// `eth_getBlockByHash`
    EthGetBlockByHash,
    /// `eth_getBlockByHash#full`
    EthGetBlockByHashFull,
    /// `eth_getTransactionCount`
    EthGetTransactionCount,
    /// `eth_getLogs`
    EthGetLogs,
    /// `eth_getCode`
    EthGetCode,
    /// `eth_getStorageAt`
    EthGetStorageAt,
    /// `eth_getTransactionByBlockNumberAndIndex`
    EthGetTransactionByBlockNumberAndIndex,
    /// `eth_getTransactionByBlockHashAndIndex`
    EthGetTransactionByBlockHashAndIndex,
    /// `eth_getBlockTransactionCountByHash`
    EthGetBlockTransactionCountByHash,
    /// `eth_getBlockTransactionCountByNumber`
    EthGetBlockTransactionCountByNumber,
    /// `eth_getBlockReceipts`
    EthGetBlockReceipts,
    /// `eth_feeHistory`
    EthFeeHistory,
    /// `eth_blockNumber`
    EthBlockNumber,
    /// `eth_chainId`
    EthChainId,
    /// `eth_gasPrice`
    EthGasPrice,
    /// `eth_maxPriorityFeePerGas`
    EthMaxPriorityFeePerGas,
    /// `eth_syncing`
    EthSyncing,
    /// `eth_accounts`
    EthAccounts,
    /// `eth_protocolVersion`
    EthProtocolVersion,
    /// `net_version`
    NetVersion,
    /// `net_listening`
    NetListening,
    /// `net_peerCount`
    NetPeerCount,
    /// `trace_block`
    TraceBlock,
    /// `trace_transaction`
    TraceTransaction,
    /// `trace_replayTransaction`
    TraceReplayTransaction,
    /// `trace_replayBlockTransactions`
    TraceReplayBlockTransactions,
    /// `debug_traceTransaction`
    DebugTraceTransaction,
    /// `debug_traceBlockByNumber`
    DebugTraceBlockByNumber,
    /// `debug_traceBlockByHash`
    DebugTraceBlockByHash,
}

// === impl RpcMethod ===

impl RpcMethod {
    /// Returns the number of variants in the enum
    pub const fn variant_count() -> usize {
        <Self as VariantArray>::VARIANTS.len()
    }

    /// Returns all variants of the enum
    pub const fn all_variants() -> &'static [Self] {
        <Self as VariantArray>::VARIANTS
    }

    /// Returns the registry names of all variants, in declaration order.
    pub fn all_variant_names() -> impl Iterator<Item = &'static str> {
        Self::all_variants().iter().map(|method| method.as_str())
    }

    /// Returns the registry name, including any variant suffix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EthCall => "eth_call",
            Self::EthEstimateGas => "eth_estimateGas",
            Self::EthGetTransactionReceipt => "eth_getTransactionReceipt",
            Self::EthGetTransactionByHash => "eth_getTransactionByHash",
            Self::EthGetBalance => "eth_getBalance",
            Self::EthGetBalanceArchive => "eth_getBalance#archive",
            Self::EthGetBlockByNumber => "eth_getBlockByNumber",
            Self::EthGetBlockByNumberFull => "eth_getBlockByNumber#full",
            Self::EthGetBlockByHash => "eth_getBlockByHash",
            Self::EthGetBlockByHashFull => "eth_getBlockByHash#full",
            Self::EthGetTransactionCount => "eth_getTransactionCount",
            Self::EthGetLogs => "eth_getLogs",
            Self::EthGetCode => "eth_getCode",
            Self::EthGetStorageAt => "eth_getStorageAt",
            Self::EthGetTransactionByBlockNumberAndIndex => {
                "eth_getTransactionByBlockNumberAndIndex"
            }
            Self::EthGetTransactionByBlockHashAndIndex => "eth_getTransactionByBlockHashAndIndex",
            Self::EthGetBlockTransactionCountByHash => "eth_getBlockTransactionCountByHash",
            Self::EthGetBlockTransactionCountByNumber => "eth_getBlockTransactionCountByNumber",
            Self::EthGetBlockReceipts => "eth_getBlockReceipts",
            Self::EthFeeHistory => "eth_feeHistory",
            Self::EthBlockNumber => "eth_blockNumber",
            Self::EthChainId => "eth_chainId",
            Self::EthGasPrice => "eth_gasPrice",
            Self::EthMaxPriorityFeePerGas => "eth_maxPriorityFeePerGas",
            Self::EthSyncing => "eth_syncing",
            Self::EthAccounts => "eth_accounts",
            Self::EthProtocolVersion => "eth_protocolVersion",
            Self::NetVersion => "net_version",
            Self::NetListening => "net_listening",
            Self::NetPeerCount => "net_peerCount",
            Self::TraceBlock => "trace_block",
            Self::TraceTransaction => "trace_transaction",
            Self::TraceReplayTransaction => "trace_replayTransaction",
            Self::TraceReplayBlockTransactions => "trace_replayBlockTransactions",
            Self::DebugTraceTransaction => "debug_traceTransaction",
            Self::DebugTraceBlockByNumber => "debug_traceBlockByNumber",
            Self::DebugTraceBlockByHash => "debug_traceBlockByHash",
        }
    }

    /// Returns the JSON-RPC method name sent on the wire, without any variant suffix.
    pub fn rpc_name(self) -> &'static str {
        let name = self.as_str();
        name.split_once('#').map_or(name, |(method, _)| method)
    }

    /// Returns the function rendering requests for this method.
    pub fn generator(self) -> Generator {
        match self {
            Self::EthCall => generators::eth_call,
            Self::EthEstimateGas => generators::eth_estimate_gas,
            Self::EthGetTransactionReceipt => generators::eth_get_transaction_receipt,
            Self::EthGetTransactionByHash => generators::eth_get_transaction_by_hash,
            Self::EthGetBalance => generators::eth_get_balance,
            Self::EthGetBalanceArchive => generators::eth_get_balance_archive,
            Self::EthGetBlockByNumber => generators::eth_get_block_by_number,
            Self::EthGetBlockByNumberFull => generators::eth_get_block_by_number_full,
            Self::EthGetBlockByHash => generators::eth_get_block_by_hash,
            Self::EthGetBlockByHashFull => generators::eth_get_block_by_hash_full,
            Self::EthGetTransactionCount => generators::eth_get_transaction_count,
            Self::EthGetLogs => generators::eth_get_logs,
            Self::EthGetCode => generators::eth_get_code,
            Self::EthGetStorageAt => generators::eth_get_storage_at,
            Self::EthGetTransactionByBlockNumberAndIndex => {
                generators::eth_get_transaction_by_block_number_and_index
            }
            Self::EthGetTransactionByBlockHashAndIndex => {
                generators::eth_get_transaction_by_block_hash_and_index
            }
            Self::EthGetBlockTransactionCountByHash => {
                generators::eth_get_block_transaction_count_by_hash
            }
            Self::EthGetBlockTransactionCountByNumber => {
                generators::eth_get_block_transaction_count_by_number
            }
            Self::EthGetBlockReceipts => generators::eth_get_block_receipts,
            Self::EthFeeHistory => generators::eth_fee_history,
            Self::EthBlockNumber => generators::eth_block_number,
            Self::EthChainId => generators::eth_chain_id,
            Self::EthGasPrice => generators::eth_gas_price,
            Self::EthMaxPriorityFeePerGas => generators::eth_max_priority_fee_per_gas,
            Self::EthSyncing => generators::eth_syncing,
            Self::EthAccounts => generators::eth_accounts,
            Self::EthProtocolVersion => generators::eth_protocol_version,
            Self::NetVersion => generators::net_version,
            Self::NetListening => generators::net_listening,
            Self::NetPeerCount => generators::net_peer_count,
            Self::TraceBlock => generators::trace_block,
            Self::TraceTransaction => generators::trace_transaction,
            Self::TraceReplayTransaction => generators::trace_replay_transaction,
            Self::TraceReplayBlockTransactions => generators::trace_replay_block_transactions,
            Self::DebugTraceTransaction => generators::debug_trace_transaction,
            Self::DebugTraceBlockByNumber => generators::debug_trace_block_by_number,
            Self::DebugTraceBlockByHash => generators::debug_trace_block_by_hash,
        }
    }
}

impl FromStr for RpcMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(method) = Self::all_variants().iter().find(|method| method.as_str() == s) {
            return Ok(*method)
        }

        // registry keys used by older weight tables
        Ok(match s {
            "getTraceBlock" => Self::TraceBlock,
            "getTraceTransaction" => Self::TraceTransaction,
            "getTraceReplayTransaction" => Self::TraceReplayTransaction,
            "getTraceReplayBlockTransactions" => Self::TraceReplayBlockTransactions,
            "getDebugTraceTransaction" => Self::DebugTraceTransaction,
            "getDebugTraceBlockByNumber" => Self::DebugTraceBlockByNumber,
            "getDebugTraceBlockByHash" => Self::DebugTraceBlockByHash,
            _ => return Err(ParseError::VariantNotFound),
        })
    }
}

impl TryFrom<&str> for RpcMethod {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, <Self as TryFrom<&str>>::Error> {
        FromStr::from_str(s)
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for RpcMethod {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RpcMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| serde::de::Error::custom(format!("{s} is not supported")))
    }
}
