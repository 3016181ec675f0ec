use ethspam_queries::{
    test_utils::MockState, MethodWeights, QueriesGenerator, QueryError, RandomQuery, RpcMethod,
    State,
};
use std::collections::{BTreeMap, HashMap};

fn method_of(line: &str) -> String {
    let request: serde_json::Value = serde_json::from_str(line).unwrap();
    request["method"].as_str().unwrap().to_string()
}

#[test]
fn unsupported_method_aborts_build() {
    ethspam_tracing::init_test_tracing();

    let weights = HashMap::from([
        ("eth_call".to_string(), 10),
        ("eth_getLogs".to_string(), 3),
        ("eth_submitWork".to_string(), 1),
    ]);
    let err = QueriesGenerator::from_weights(weights).unwrap_err();
    assert_eq!(err, QueryError::UnsupportedMethod("eth_submitWork".to_string()));
}

#[test]
fn all_zero_weights_cannot_sample() {
    let weights: MethodWeights =
        RpcMethod::all_variants().iter().map(|method| (*method, 0)).collect();
    let generator = QueriesGenerator::from_weights(weights).unwrap();

    let state = MockState::seeded(1);
    for _ in 0..3 {
        assert_eq!(generator.query(&state), Err(QueryError::NoGenerators));
    }
}

#[test]
fn weighted_frequencies_converge() {
    ethspam_tracing::init_test_tracing();

    let weights = BTreeMap::from([("eth_chainId", 1), ("net_version", 9)]);
    let generator = QueriesGenerator::from_weights(weights).unwrap();
    let state = MockState::seeded(0xdead_beef);

    const N: usize = 100_000;
    let heavy = (0..N)
        .filter(|_| method_of(&generator.query(&state).unwrap()) == "net_version")
        .count();

    let share = heavy as f64 / N as f64;
    assert!(share > 0.85 && share < 0.95, "net_version selected {share}");
}

#[test]
fn default_table_follows_weights() {
    let weights = MethodWeights::default();
    let generator = QueriesGenerator::from_weights(weights.iter()).unwrap();
    assert_eq!(generator.total_weight(), weights.total());
    assert_eq!(generator.queries()[0].method(), "eth_call");

    let state = MockState::seeded(11);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..50_000 {
        let query = generator.pick(state.rand_i64()).unwrap();
        *counts.entry(query.method().to_string()).or_default() += 1;
    }

    // eth_call carries ~38.7% of the traffic
    let share = counts["eth_call"] as f64 / 50_000.0;
    assert!((0.36..0.42).contains(&share), "eth_call selected {share}");
    assert!(counts["eth_accounts"] < counts["eth_getLogs"]);
}

#[test]
fn concurrent_sampling() {
    let generator = QueriesGenerator::from_weights(MethodWeights::default()).unwrap();
    let state = MockState::seeded(5);

    let lines: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..250).map(|_| generator.query(&state).unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    let mut ids: Vec<i64> = lines
        .iter()
        .flatten()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn custom_queries_mix_with_registry() {
    fn client_version(state: &dyn State) -> String {
        format!("{{\"jsonrpc\":\"2.0\",\"id\":{},\"method\":\"web3_clientVersion\"}}\n", state.id())
    }

    let mut generator =
        QueriesGenerator::from_weights(BTreeMap::from([("eth_blockNumber", 1)])).unwrap();
    generator.add(RandomQuery::new("web3_clientVersion", 1, client_version)).unwrap();

    // [eth_blockNumber, web3_clientVersion], both weight 1
    let state = MockState::scripted([0, 1]);
    assert_eq!(method_of(&generator.query(&state).unwrap()), "eth_blockNumber");
    assert_eq!(method_of(&generator.query(&state).unwrap()), "web3_clientVersion");
}
