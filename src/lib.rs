//! Fieldwork: a terminal component gallery with a matching API server.
//!
//! The library splits into the form engine ([`form`]), the themed widget
//! set ([`ui`]), application state and key handling ([`state`], [`app`]),
//! and the HTTP contract shared by the client and server halves
//! ([`contract`], [`client`], [`server`]).

pub mod app;
pub mod client;
pub mod config;
pub mod contract;
pub mod form;
pub mod server;
pub mod state;
pub mod theme;
pub mod ui;
