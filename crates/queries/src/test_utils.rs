//! Deterministic [`State`] for tests and benchmarks.

use crate::{Call, Contract, State};
use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    collections::VecDeque,
    sync::atomic::{AtomicI64, Ordering},
};

/// Block height reported by a fresh [`MockState`].
pub const MOCK_CURRENT_BLOCK: u64 = 18_000_000;

/// Where a [`MockState`] takes its draws from.
#[derive(Debug)]
enum Draws {
    /// Seeded pseudo-random draws.
    Seeded(StdRng),
    /// Fixed draws, repeated once exhausted.
    Scripted { draws: VecDeque<i64> },
}

impl Draws {
    fn next(&mut self) -> i64 {
        match self {
            Self::Seeded(rng) => rng.gen(),
            Self::Scripted { draws } => {
                let Some(draw) = draws.pop_front() else { return 0 };
                draws.push_back(draw);
                draw
            }
        }
    }
}

/// A [`State`] backed by fixed chain data and reproducible draws.
///
/// Request ids start at 1 and increase by one per generated request.
#[derive(Debug)]
pub struct MockState {
    draws: Mutex<Draws>,
    next_id: AtomicI64,
    current_block: u64,
    address: String,
    transaction: String,
    block_hash: String,
    contract: Contract,
    call: Call,
}

impl MockState {
    /// Creates a state drawing from a [`StdRng`] seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_draws(Draws::Seeded(StdRng::seed_from_u64(seed)))
    }

    /// Creates a state returning the given draws in order, cycling when exhausted.
    pub fn scripted(draws: impl IntoIterator<Item = i64>) -> Self {
        Self::with_draws(Draws::Scripted { draws: draws.into_iter().collect() })
    }

    fn with_draws(draws: Draws) -> Self {
        Self {
            draws: Mutex::new(draws),
            next_id: AtomicI64::new(1),
            current_block: MOCK_CURRENT_BLOCK,
            address: "0x742d35cc6634c0532925a3b844bc454e4438f44e".to_string(),
            transaction: "0x5525c63a805df2b83c113ebcc8c7672a3b290673c4e81335b410cd9ebc64e085"
                .to_string(),
            block_hash: "0xb3b20624f8f0f86eb50dd04688409e5cea4bd02d700bf6e79e9384d47d6a5a35"
                .to_string(),
            contract: Contract {
                address: "0x6b175474e89094c44da98b954eedeac495271d0f".to_string(),
                topics: vec![
                    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
                        .to_string(),
                    "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"
                        .to_string(),
                ],
            },
            call: Call {
                to: Some("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string()),
                from: "0x742d35cc6634c0532925a3b844bc454e4438f44e".to_string(),
                input: "0x70a08231000000000000000000000000742d35cc6634c0532925a3b844bc454e4438f44e"
                    .to_string(),
                block: MOCK_CURRENT_BLOCK - 3,
            },
        }
    }

    /// Sets the reported block height.
    pub fn with_current_block(mut self, block: u64) -> Self {
        self.current_block = block;
        self
    }

    /// Sets the call returned by [`State::random_call`].
    pub fn with_call(mut self, call: Call) -> Self {
        self.call = call;
        self
    }

    /// Sets the contract returned by [`State::random_contract`].
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// Returns the contract handed out by this state.
    pub const fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Returns the block hash handed out by this state.
    pub fn block_hash(&self) -> &str {
        &self.block_hash
    }

    /// Returns the transaction hash handed out by this state.
    pub fn transaction(&self) -> &str {
        &self.transaction
    }

    /// Returns the address handed out by this state.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl State for MockState {
    fn id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn rand_i64(&self) -> i64 {
        self.draws.lock().next()
    }

    fn current_block(&self) -> u64 {
        self.current_block
    }

    fn random_address(&self) -> String {
        self.address.clone()
    }

    fn random_transaction(&self) -> String {
        self.transaction.clone()
    }

    fn random_block(&self) -> String {
        self.block_hash.clone()
    }

    fn random_contract(&self) -> Contract {
        self.contract.clone()
    }

    fn random_call(&self) -> Call {
        self.call.clone()
    }
}
