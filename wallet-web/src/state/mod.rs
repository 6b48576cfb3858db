//! Reactive application state

pub mod transactions;
