//! HTTP interactions
//!
//! Thin interaction values that resolve a resource path against the actor's
//! `CallApi` base URL and dispatch through it.

mod http;

pub use http::{Delete, Get, Post, Put};
