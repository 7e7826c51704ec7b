use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")]));
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "eighty"), ("BIND_ADDR", "localhost:1")]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn port_value_is_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", " 4000 ")]));
    assert_eq!(config.port, 4000);
}
