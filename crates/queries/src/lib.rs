//! Weighted generation of Ethereum JSON-RPC requests for load testing nodes.
//!
//! A [`QueriesGenerator`] is built once from a table of method weights and then sampled for
//! every outgoing request. Each sample picks an [`RpcMethod`] proportionally to its weight and
//! renders a newline terminated JSON-RPC 2.0 request whose parameters are drawn from a
//! chain-aware [`State`].
//!
//! # Example
//!
//! ```
//! use ethspam_queries::{test_utils::MockState, MethodWeights, QueriesGenerator};
//!
//! let generator = QueriesGenerator::from_weights(MethodWeights::default()).unwrap();
//! let state = MockState::seeded(7);
//!
//! let request = generator.query(&state).unwrap();
//! assert!(request.ends_with('\n'));
//! ```

#![doc(issue_tracker_base_url = "https://github.com/ethspam/ethspam/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{QueryError, QueryResult};

mod generator;
pub use generator::{Generator, QueriesGenerator, RandomQuery};

mod method;
pub use method::RpcMethod;

mod request;
pub use request::{archive_block, log_block_range, recent_block, tx_index};

mod state;
pub use state::{Call, Contract, State};

mod weights;
pub use weights::MethodWeights;

pub mod generators;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
