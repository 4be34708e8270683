//! `wa-gateway`: the `watch-actions` binary's HTTP surface and CLI.
//!
//! Serves the Rasa action-server protocol (`POST /webhook`) on top of the
//! action registry in `wa-actions`.

pub mod api;
pub mod cli;
pub mod state;
