use ethspam_queries::{MethodWeights, QueriesGenerator, RandomQuery, RpcMethod};
use ethspam_tracing::{
    tracing::{self, level_filters::LevelFilter},
    tracing_subscriber, LayerInfo, LogFormat,
};
use std::{
    io,
    sync::{Arc, Mutex},
};

/// Collects everything written by a subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(str::to_string).collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(filters: &str, f: impl FnOnce()) -> Vec<String> {
    let info = LayerInfo::new(
        LogFormat::Json,
        LevelFilter::WARN.to_string(),
        filters.to_string(),
        None,
    );
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(info.env_filter().unwrap())
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.lines()
}

#[test]
fn build_events_are_emitted() {
    let lines = capture("ethspam::queries=debug", || {
        QueriesGenerator::from_weights(MethodWeights::default()).unwrap();
    });

    let built = lines.iter().find(|line| line.contains("Built queries generator")).unwrap();
    assert!(built.contains("\"target\":\"ethspam::queries\""), "{built}");
    assert!(built.contains("\"queries\":19"), "{built}");
    assert!(built.contains("\"total_weight\":4979"), "{built}");
    assert_eq!(lines.iter().filter(|line| line.contains("Registering query")).count(), 19);
}

#[test]
fn negative_weight_warns_by_default() {
    let lines = capture("", || {
        let mut generator = QueriesGenerator::default();
        generator.add(RandomQuery::from_method(RpcMethod::EthCall, 4)).unwrap();
        generator.add(RandomQuery::from_method(RpcMethod::EthGetLogs, -1)).unwrap();
    });

    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("\"level\":\"WARN\""), "{}", lines[0]);
    assert!(lines[0].contains("eth_getLogs"), "{}", lines[0]);
}
