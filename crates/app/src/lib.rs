//! # itemhub-app
//!
//! Stateful item layer: shared items, change notification, wiring helpers.
//!
//! ## Responsibilities
//! - Provide the generic [`Item`](item::Item): one lock per item, idempotent
//!   assignment, change-hook fan-out
//! - Define the **notifier port** ([`ChangeNotifier`](ports::ChangeNotifier))
//!   the rule/listener side plugs into
//! - Provide **in-process infrastructure** (event bus) that hands change
//!   events to asynchronous consumers
//! - Load configuration and install the tracing subscriber
//!
//! ## Dependency rule
//! Depends on `itemhub-domain` only (plus `tokio::sync` for channels).
//! Hub transports and rule engines depend on *this* crate, not the reverse.

pub mod config;
pub mod event_bus;
pub mod item;
pub mod ports;
pub mod telemetry;
