//! Method weight tables.

use crate::{QueryError, RpcMethod};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Relative weights of the methods to generate, keyed by registry name.
///
/// Serialized as a plain map, so a TOML table like
///
/// ```toml
/// eth_call = 1928
/// eth_getLogs = 252
/// "eth_getBlockByNumber#full" = 10
/// ```
///
/// deserializes directly into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodWeights(BTreeMap<String, i64>);

impl MethodWeights {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the traffic shape of a 5000 query Infura sample taken in December 2019,
    /// restricted to supported methods.
    pub fn infura_2019() -> Self {
        [
            (RpcMethod::EthAccounts, 3),
            (RpcMethod::EthGetStorageAt, 4),
            (RpcMethod::EthSyncing, 4),
            (RpcMethod::NetPeerCount, 7),
            (RpcMethod::NetListening, 12),
            (RpcMethod::EthGasPrice, 14),
            (RpcMethod::NetVersion, 25),
            (RpcMethod::EthGetTransactionByBlockNumberAndIndex, 30),
            (RpcMethod::EthGetBlockByHash, 38),
            (RpcMethod::EthEstimateGas, 45),
            (RpcMethod::EthGetCode, 88),
            (RpcMethod::EthGetLogs, 252),
            (RpcMethod::EthGetTransactionByHash, 255),
            (RpcMethod::EthBlockNumber, 333),
            (RpcMethod::EthGetTransactionCount, 390),
            (RpcMethod::EthGetBlockByNumber, 399),
            (RpcMethod::EthGetBalance, 545),
            (RpcMethod::EthGetTransactionReceipt, 607),
            (RpcMethod::EthCall, 1928),
        ]
        .into_iter()
        .collect()
    }

    /// Sets the weight of a method, returning the previous one.
    pub fn insert(&mut self, method: impl Into<String>, weight: i64) -> Option<i64> {
        self.0.insert(method.into(), weight)
    }

    /// Returns the weight of a method.
    pub fn get(&self, method: &str) -> Option<i64> {
        self.0.get(method).copied()
    }

    /// Returns the number of configured methods, including disabled ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no method is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }

    /// Iterates over `(method, weight)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.0.iter().map(|(method, weight)| (method.as_str(), *weight))
    }

    /// Checks that every enabled method is supported, without building a generator.
    pub fn validate(&self) -> Result<(), QueryError> {
        for (method, weight) in self.iter() {
            if weight != 0 && method.parse::<RpcMethod>().is_err() {
                return Err(QueryError::UnsupportedMethod(method.to_string()))
            }
        }
        Ok(())
    }
}

impl Default for MethodWeights {
    fn default() -> Self {
        Self::infura_2019()
    }
}

impl FromIterator<(RpcMethod, i64)> for MethodWeights {
    fn from_iter<T: IntoIterator<Item = (RpcMethod, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(method, weight)| (method.as_str().to_string(), weight)).collect())
    }
}

impl FromIterator<(String, i64)> for MethodWeights {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, i64>> for MethodWeights {
    fn from(weights: BTreeMap<String, i64>) -> Self {
        Self(weights)
    }
}

impl IntoIterator for MethodWeights {
    type Item = (String, i64);
    type IntoIter = btree_map::IntoIter<String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
