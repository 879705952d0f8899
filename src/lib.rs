//! My Pocket - personal finance tracker with an AI assistant
//!
//! This library implements a personal finance tracker built around an
//! append-only transaction log. Balances, budget progress, and goal totals
//! are never stored; they are re-derived from the log on every read.
//!
//! # Architecture
//!
//! - `config`: Configuration, settings, and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, accounts, budgets, goals)
//! - `storage`: JSON file-per-collection storage layer
//! - `services`: Derivation engine, ledger mutations, reminder evaluation
//! - `interpreter`: Free-text command interpretation via the hosted model
//! - `backup`: Bundle export/restore
//! - `audit`: Append-only audit log
//! - `cli`: Command handlers

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PocketError, PocketResult};
