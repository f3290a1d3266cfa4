// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scripted player strategies.
use rand::{Rng, rngs::StdRng};

use holdem_core::{Action, TableView};

/// A simulated player strategy.
pub trait Strategy {
    /// Returns an action for the current actor given a table snapshot.
    fn execute(&mut self, view: &TableView) -> Action;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn execute(&mut self, view: &TableView) -> Action {
        (**self).execute(view)
    }
}

/// Always checks or calls.
#[derive(Debug, Clone, Default)]
pub struct Passive;

impl Strategy for Passive {
    fn execute(&mut self, view: &TableView) -> Action {
        if view.can_call() {
            Action::Call
        } else if view.can_check() {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

/// Mostly calls, sometimes folds or makes a minimum raise.
#[derive(Debug)]
pub struct RandomPlay {
    rng: StdRng,
}

impl RandomPlay {
    /// Creates a strategy with the given randomness.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomPlay {
    fn execute(&mut self, view: &TableView) -> Action {
        let p = self.rng.random::<f64>();

        if p < 0.1 && !view.can_check() {
            Action::Fold
        } else if p < 0.25 && view.can_raise() {
            Action::Raise(view.min_raise)
        } else {
            Passive.execute(view)
        }
    }
}
