// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn composes_user_and_host() {
    let identity = EnvIdentity::resolve(env(&[("USER", "alice"), ("HOSTNAME", "host1")]));
    assert_eq!(identity, Identity::new("alice@host1"));
}

#[test]
fn windows_variables_are_used_when_unix_ones_are_missing() {
    let identity =
        EnvIdentity::resolve(env(&[("USERNAME", "bob"), ("COMPUTERNAME", "DESKTOP-7")]));
    assert_eq!(identity, Identity::new("bob@DESKTOP-7"));
}

#[test]
fn explicit_override_wins() {
    let identity = EnvIdentity::resolve(env(&[
        ("FUZED_IDENTITY", "ci-runner-3"),
        ("USER", "alice"),
        ("HOSTNAME", "host1"),
    ]));
    assert_eq!(identity, Identity::new("ci-runner-3"));
}

#[test]
fn blank_values_are_ignored() {
    let identity = EnvIdentity::resolve(env(&[
        ("FUZED_IDENTITY", "  "),
        ("USER", ""),
        ("USERNAME", "carol"),
        ("HOSTNAME", "host9"),
    ]));
    assert_eq!(identity, Identity::new("carol@host9"));
}

#[test]
fn missing_user_falls_back_to_unknown() {
    let identity = EnvIdentity::resolve(env(&[("HOSTNAME", "host1")]));
    assert_eq!(identity, Identity::new("unknown@host1"));
}

#[test]
fn static_identity_is_fixed() {
    let provider = StaticIdentity::new("alice@host1");
    assert_eq!(provider.identity(), provider.identity());
    assert_eq!(provider.identity().as_str(), "alice@host1");
}
