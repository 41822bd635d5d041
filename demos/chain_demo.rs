// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Signup chain demo.
//!
//! Run with `cargo run --example chain_demo [config.yaml|config.toml] [email]`.

use anyhow::Context;
use handler_chain::config::{load_and_validate_config, ChainConfig};
use handler_chain::observability::init_tracing;
use handler_chain::{impl_field_access, Chain, ChainError, Handler, StopSignal};
use std::env;

#[derive(Debug, Default, Clone)]
struct Signup {
    email: String,
    display_name: String,
    source: String,
}

impl_field_access!(Signup { email, display_name } readonly { source });

#[derive(Debug, Default, Clone)]
struct Outcome {
    accepted: bool,
    score: i32,
    reason: String,
}

impl_field_access!(Outcome { accepted, score, reason });

struct RejectBlockedDomains;

impl Handler<Signup, Outcome, ChainError> for RejectBlockedDomains {
    fn handle(
        &self,
        chain: &mut Chain<Signup, Outcome>,
        stop: &StopSignal,
    ) -> Result<(), ChainError> {
        if chain.context().email.ends_with("@spam.example") {
            chain.update_result("reason", "blocked domain".to_string())?;
            stop.stop();
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "reject_blocked_domains"
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("loading chain config from {}", path))?,
        None => ChainConfig::default(),
    };
    init_tracing(&config.logging)?;

    let email = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "ferris@rust.example".to_string());

    let mut chain: Chain<Signup, Outcome> = Chain::with_config(&config);
    chain
        .add(move |chain, _stop| {
            chain.update_context("email", email.clone())?;
            Ok(())
        })
        .add(|chain, _stop| {
            // source is read-only, so this update is rejected and ignored
            if let Err(err) = chain.update_context("source", "demo".to_string()) {
                tracing::debug!("{}", err);
            }
            Ok(())
        })
        .add(|chain, _stop| {
            if !chain.context().email.contains('@') {
                return Err(ChainError::handler("validate_email", "missing '@'"));
            }
            Ok(())
        })
        .add_handler(RejectBlockedDomains)
        .add(|chain, _stop| {
            let local = chain
                .context()
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string();
            chain.update_context("display_name", local)?;
            Ok(())
        })
        .add(|chain, _stop| {
            let score = chain.context().display_name.len() as i32 * 10;
            chain.update_result("score", score)?;
            chain.update_result("accepted", true)?;
            Ok(())
        });

    chain.run()?;

    let signup = chain.get_context();
    let outcome = chain.get_result();
    println!("signup:  {:?}", signup);
    println!("source:  {:?}", signup.source);
    println!("outcome: {:?}", outcome);
    if chain.is_stopped() {
        println!("stopped early: {}", outcome.reason);
    }

    Ok(())
}
