//! Shared test harness modules for the geoint CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(
    clippy::expect_used,
    reason = "Tests fail fast on broken fixtures"
)]

use super::*;

mod helpers;
mod unit;
