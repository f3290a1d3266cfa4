// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table configuration.
use serde::{Deserialize, Serialize};

use crate::{error::TableError, poker::Chips};

/// Table configuration supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats, each seat gets a player.
    pub seats: usize,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The chips each player starts the session with.
    pub starting_chips: Chips,
}

impl TableConfig {
    /// The minimum number of seats.
    pub const MIN_SEATS: usize = 2;
    /// The maximum number of seats, a 52 cards deck is enough for all of them.
    pub const MAX_SEATS: usize = 10;

    /// Checks the configuration values.
    pub fn validate(&self) -> Result<(), TableError> {
        if !(Self::MIN_SEATS..=Self::MAX_SEATS).contains(&self.seats) {
            return Err(TableError::InvalidConfig(format!(
                "seats must be {}..={}, got {}",
                Self::MIN_SEATS,
                Self::MAX_SEATS,
                self.seats
            )));
        }

        if self.small_blind == Chips::ZERO || self.small_blind > self.big_blind {
            return Err(TableError::InvalidConfig(format!(
                "blinds must be 0 < small blind <= big blind, got {}/{}",
                self.small_blind, self.big_blind
            )));
        }

        if self.starting_chips == Chips::ZERO {
            return Err(TableError::InvalidConfig(
                "starting chips must be positive".to_string(),
            ));
        }

        // All the chips on the table must fit a chips amount.
        let total = u32::try_from(self.seats)
            .ok()
            .and_then(|seats| seats.checked_mul(self.starting_chips.amount()));
        if total.is_none() {
            return Err(TableError::InvalidConfig(format!(
                "{} seats with {} chips exceed the maximum chips {}",
                self.seats,
                self.starting_chips,
                u32::MAX
            )));
        }

        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            small_blind: Chips::new(10),
            big_blind: Chips::new(20),
            starting_chips: Chips::new(1_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.seats, 4);
        assert_eq!(config.small_blind, Chips::new(10));
        assert_eq!(config.big_blind, Chips::new(20));
        assert_eq!(config.starting_chips, Chips::new(1_000));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn invalid_configs() {
        let bad = [
            TableConfig {
                seats: 1,
                ..Default::default()
            },
            TableConfig {
                seats: 11,
                ..Default::default()
            },
            TableConfig {
                small_blind: Chips::ZERO,
                ..Default::default()
            },
            TableConfig {
                small_blind: Chips::new(30),
                ..Default::default()
            },
            TableConfig {
                starting_chips: Chips::ZERO,
                ..Default::default()
            },
            TableConfig {
                seats: 2,
                starting_chips: Chips::new(3_000_000_000),
                ..Default::default()
            },
        ];

        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(TableError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn table_chips_fit_a_chips_amount() {
        let max = TableConfig {
            seats: 10,
            starting_chips: Chips::new(u32::MAX / 10),
            ..Default::default()
        };
        assert_eq!(max.validate(), Ok(()));

        let over = TableConfig {
            starting_chips: Chips::new(u32::MAX / 10 + 1),
            ..max
        };
        assert!(matches!(
            over.validate(),
            Err(TableError::InvalidConfig(_))
        ));
    }
}
