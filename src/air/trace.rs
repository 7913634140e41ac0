//! Execution trace recording for the running-sum program.
//!
//! Row `i` holds the price consumed at step `i` and the total accumulated
//! strictly before it. A final boundary row repeats the grand total in both
//! columns.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::goldilocks::Goldilocks;
use crate::math::polynomial::Polynomial;

/// Raw trace columns, each of length `prices.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Price column
    pub first: Vec<Goldilocks>,
    /// Running-total column
    pub second: Vec<Goldilocks>,
}

/// Trace rows, each `(first[i], second[i])` read as the coefficients of a
/// degree-1 polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTrace {
    pub rows: Vec<Polynomial>,
}

impl ExecutionTrace {
    /// Number of execution steps, boundary row included.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Gets execution step by index.
    pub fn row(&self, index: usize) -> &Polynomial {
        &self.rows[index]
    }
}

impl Receipt {
    /// Runs the computation over `prices` and records its trace.
    #[tracing::instrument(skip_all, fields(steps = prices.len()))]
    pub fn compute(prices: &[Goldilocks]) -> Self {
        let mut first = Vec::with_capacity(prices.len() + 1);
        let mut second = Vec::with_capacity(prices.len() + 1);
        let mut running = Goldilocks::zero();

        for &price in prices {
            first.push(price);
            second.push(running);
            running += price;
        }

        trace!(total = %running, "appending boundary row");
        first.push(running);
        second.push(running);

        Self { first, second }
    }

    pub fn from_u64s(prices: &[u64]) -> Self {
        let prices: Vec<Goldilocks> = prices.iter().map(|&p| Goldilocks::new(p)).collect();
        Self::compute(&prices)
    }

    /// Number of rows, boundary row included.
    pub fn height(&self) -> usize {
        self.first.len()
    }

    /// Sum of every price, as stored in the boundary row. `None` for a
    /// receipt without rows.
    pub fn result(&self) -> Option<Goldilocks> {
        self.second.last().copied()
    }

    pub fn row(&self, index: usize) -> Polynomial {
        Polynomial::new(vec![self.first[index], self.second[index]])
    }

    pub fn trace(&self) -> ExecutionTrace {
        ExecutionTrace {
            rows: (0..self.height()).map(|i| self.row(i)).collect(),
        }
    }
}
