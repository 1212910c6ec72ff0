//! # itemhub-domain
//!
//! Pure value model for itemhub items mirrored from a home-automation hub.
//!
//! ## Responsibilities
//! - Foundational types: item names, event identifiers, timestamps, error conventions
//! - Define **values**: the bare and hub-wrapped encodings an item may receive
//!   (numbers, strings, quantities with a unit, `ON`/`OFF`, `OPEN`/`CLOSED`, …)
//! - Define **units**: conversion arithmetic between compatible unit symbols
//! - Define **kinds**: one normalizer per item type turning an incoming value
//!   into the canonical state that item stores
//! - Define **events**: the payload fired when an item's state changes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO or locking.
//! Shared, mutable items live in `itemhub-app`.

pub mod error;
pub mod id;
pub mod name;
pub mod time;

pub mod event;
pub mod kind;
pub mod value;
