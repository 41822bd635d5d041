// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::chain::{Chain, StopSignal};

/// One step of a [`Chain`].
///
/// A handler may read or mutate the chain's context and result, call
/// [`StopSignal::stop`] to end the run early, or return an error to fail it.
/// Closures with the matching signature are handlers already; implement the
/// trait by hand to give a step a stable name in the logs.
pub trait Handler<C, R, E> {
    fn handle(&self, chain: &mut Chain<C, R, E>, stop: &StopSignal) -> Result<(), E>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<C, R, E, F> Handler<C, R, E> for F
where
    F: Fn(&mut Chain<C, R, E>, &StopSignal) -> Result<(), E>,
{
    fn handle(&self, chain: &mut Chain<C, R, E>, stop: &StopSignal) -> Result<(), E> {
        self(chain, stop)
    }
}
