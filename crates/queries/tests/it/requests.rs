use ethspam_queries::{test_utils::MockState, Call, MethodWeights, QueriesGenerator, RpcMethod};
use serde_json::Value;

/// Methods that are sent without a `params` member.
const PARAMETERLESS: [RpcMethod; 10] = [
    RpcMethod::EthBlockNumber,
    RpcMethod::EthChainId,
    RpcMethod::EthGasPrice,
    RpcMethod::EthMaxPriorityFeePerGas,
    RpcMethod::EthSyncing,
    RpcMethod::EthAccounts,
    RpcMethod::EthProtocolVersion,
    RpcMethod::NetVersion,
    RpcMethod::NetListening,
    RpcMethod::NetPeerCount,
];

fn assert_well_formed(line: &str, params_expected: bool) -> Value {
    assert!(line.ends_with('\n'), "{line:?}");
    assert_eq!(line.matches('\n').count(), 1, "{line:?}");

    let request: Value = serde_json::from_str(line).unwrap();
    let object = request.as_object().unwrap();
    assert_eq!(object["jsonrpc"], "2.0");
    assert!(object["id"].is_i64(), "{line}");
    assert!(object["method"].is_string(), "{line}");
    if params_expected {
        assert!(object["params"].is_array(), "{line}");
    } else {
        assert!(!object.contains_key("params"), "{line}");
    }
    request
}

fn quantity(value: &Value) -> u64 {
    u64::from_str_radix(value.as_str().unwrap().trim_start_matches("0x"), 16).unwrap()
}

#[test]
fn every_method_is_well_formed() {
    for seed in 0..8 {
        let state = MockState::seeded(seed).with_current_block(150);
        for method in RpcMethod::all_variants() {
            let line = (method.generator())(&state);
            let request = assert_well_formed(&line, !PARAMETERLESS.contains(method));
            assert_eq!(request["method"], method.rpc_name());
        }
    }
}

#[test]
fn sampled_stream_is_well_formed() {
    let weights: MethodWeights =
        RpcMethod::all_variants().iter().map(|method| (*method, 1)).collect();
    let generator = QueriesGenerator::from_weights(weights).unwrap();
    let state = MockState::seeded(99);

    let mut previous_id = 0;
    for _ in 0..2_000 {
        let line = generator.query(&state).unwrap();
        let request: Value = serde_json::from_str(&line).unwrap();

        let id = request["id"].as_i64().unwrap();
        assert!(id > previous_id);
        previous_id = id;

        let method: RpcMethod = request["method"].as_str().unwrap().parse().unwrap();
        assert_eq!(request.get("params").is_some(), !PARAMETERLESS.contains(&method), "{line}");
    }
}

#[test]
fn recent_blocks_stay_recent() {
    let state = MockState::seeded(3).with_current_block(0x1000);
    for _ in 0..200 {
        let line = (RpcMethod::EthGetBlockByNumberFull.generator())(&state);
        let request: Value = serde_json::from_str(&line).unwrap();
        let block = quantity(&request["params"][0]);
        assert!((0x1000 - 4..=0x1000).contains(&block), "{block}");
        assert_eq!(request["params"][1], true);
    }
}

#[test]
fn logs_ranges_are_ordered() {
    let state = MockState::seeded(17);
    for _ in 0..500 {
        let line = (RpcMethod::EthGetLogs.generator())(&state);
        let request: Value = serde_json::from_str(&line).unwrap();
        let filter = &request["params"][0];
        let (from, to) = (quantity(&filter["fromBlock"]), quantity(&filter["toBlock"]));
        assert!(from <= to, "{from} > {to}");
        assert!(to - from < 5000);
    }
}

#[test]
fn call_recipient_presence() {
    let creation = MockState::seeded(0).with_call(Call {
        to: None,
        from: "0x742d35cc6634c0532925a3b844bc454e4438f44e".to_string(),
        input: "0x6080604052".to_string(),
        block: 1_000,
    });
    let call = MockState::seeded(0);

    for method in [RpcMethod::EthCall, RpcMethod::EthEstimateGas] {
        let request: Value = serde_json::from_str(&(method.generator())(&creation)).unwrap();
        assert!(request["params"][0].get("to").is_none());
        assert_eq!(request["params"][1], "0x3e7");

        let request: Value = serde_json::from_str(&(method.generator())(&call)).unwrap();
        assert!(request["params"][0].get("to").is_some());
    }
}
