// Library target exists solely for the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// tests can import types via `cluegrid::game::*` / `cluegrid::app::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

pub mod app;
pub mod config;
pub mod event;
pub mod game;
pub mod provider;
pub mod ui;
