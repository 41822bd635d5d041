// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::rc::Rc;

/// Cooperative early-termination callback bound to one chain.
///
/// Calling [`stop`](StopSignal::stop) sets that chain's forced-stop flag
/// immediately, so [`Chain::is_stopped`](crate::Chain::is_stopped) reports it
/// inside the handler as well. The chain checks the flag once the handler
/// returns and then invokes no further handlers. A signal cannot clear the
/// flag.
#[derive(Debug, Clone)]
pub struct StopSignal {
    forced_stop: Rc<Cell<bool>>,
}

impl StopSignal {
    pub(crate) fn bound_to(forced_stop: &Rc<Cell<bool>>) -> Self {
        Self {
            forced_stop: Rc::clone(forced_stop),
        }
    }

    /// Ask the chain to stop after the current handler returns.
    pub fn stop(&self) {
        self.forced_stop.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.forced_stop.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_sticky() {
        let flag = Rc::new(Cell::new(false));
        let signal = StopSignal::bound_to(&flag);
        assert!(!signal.is_requested());

        signal.stop();
        signal.stop();
        assert!(signal.is_requested());
    }

    #[test]
    fn test_stop_sets_the_bound_flag() {
        let flag = Rc::new(Cell::new(false));
        let signal = StopSignal::bound_to(&flag);

        signal.stop();
        assert!(flag.get());
    }
}
