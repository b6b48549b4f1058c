//! Browser dashboard for the onchain dust harvester.
//!
//! Starts and stops the harvester backend over HTTP, shows its run state and
//! counters, and lists the candidates it found. Components receive the page
//! elements they write to as injected handles, so everything except the
//! Dioxus rendering shell runs and is tested natively.

pub mod api;
pub mod candidates;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod i18n;
pub mod notify;
pub mod page;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;
