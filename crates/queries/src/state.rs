//! Chain state consumed by the request generators.

use std::sync::Arc;

/// A contract observed on chain, together with event topics it emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    /// Hex encoded contract address.
    pub address: String,
    /// Hex encoded event topics associated with the contract.
    pub topics: Vec<String>,
}

/// Parameters of a call that was observed on chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Call {
    /// Call recipient. `None` (or an empty string) marks a contract creation.
    pub to: Option<String>,
    /// Hex encoded sender.
    pub from: String,
    /// Hex encoded calldata.
    pub input: String,
    /// Block the call was included in.
    pub block: u64,
}

impl Call {
    /// Returns the recipient if the call targets an existing account.
    pub fn recipient(&self) -> Option<&str> {
        self.to.as_deref().filter(|to| !to.is_empty())
    }
}

/// Source of chain-consistent randomness for request generation.
///
/// Implementations decide how values are sampled and cached; generators only read from it.
/// Sampling a shared [`QueriesGenerator`](crate::QueriesGenerator) from several threads
/// requires the state to be [`Sync`] as well.
pub trait State {
    /// Returns the next JSON-RPC request id.
    fn id(&self) -> i64;

    /// Returns a uniformly distributed pseudo-random value. The sign is unconstrained.
    fn rand_i64(&self) -> i64;

    /// Returns the latest known block number.
    fn current_block(&self) -> u64;

    /// Returns an address that was active on chain.
    fn random_address(&self) -> String;

    /// Returns the hash of a recent transaction.
    fn random_transaction(&self) -> String;

    /// Returns the hash of a recent block.
    fn random_block(&self) -> String;

    /// Returns a contract address and topics it emitted.
    fn random_contract(&self) -> Contract;

    /// Returns the parameters of a recently observed call.
    fn random_call(&self) -> Call;
}

macro_rules! delegate_state {
    ($($ptr:ty),+) => {$(
        impl<T: State + ?Sized> State for $ptr {
            fn id(&self) -> i64 {
                (**self).id()
            }

            fn rand_i64(&self) -> i64 {
                (**self).rand_i64()
            }

            fn current_block(&self) -> u64 {
                (**self).current_block()
            }

            fn random_address(&self) -> String {
                (**self).random_address()
            }

            fn random_transaction(&self) -> String {
                (**self).random_transaction()
            }

            fn random_block(&self) -> String {
                (**self).random_block()
            }

            fn random_contract(&self) -> Contract {
                (**self).random_contract()
            }

            fn random_call(&self) -> Call {
                (**self).random_call()
            }
        }
    )+};
}

delegate_state!(&T, Box<T>, Arc<T>);
