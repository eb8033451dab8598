// Shared helpers for integration tests
#![allow(dead_code)]

use jcst::ParserConfig;
use serde::Serialize;

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn config() -> ParserConfig {
    ParserConfig::default()
}

pub fn json<T: Serialize>(node: &T) -> serde_json::Value {
    jcst::cst::to_json_value(node).expect("serializable node")
}
