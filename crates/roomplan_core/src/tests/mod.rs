//! Cross-module scenario tests
//!
//! Tests are organized by topic:
//! - `allocation` - Tax rate lookup feeding the contribution allocator
//! - `limits_flow` - CRA limit updates and period-attributed contributions
//! - `portfolio` - Accounts, applied transactions, and dashboard roll-ups

mod portfolio;
