//! Rostrum Application - Screenplay capability and ports
//!
//! This crate defines:
//! - Port traits for the pluggable sender and request interceptors
//! - The `CallApi` capability and its dispatch pipeline
//! - The screenplay layer (actors, abilities, questions, interactions)
//! - Questions over the last recorded response

pub mod call_api;
pub mod error;
pub mod interactions;
pub mod interceptors;
pub mod ports;
pub mod questions;
pub mod screenplay;

pub use call_api::CallApi;
pub use error::{InteractionError, QuestionError, SendError};
pub use interactions::{Delete, Get, Post, Put};
pub use interceptors::AddHeader;
pub use ports::{HttpSender, InterceptorError, RequestInterceptor, TransportError};
pub use questions::{LastResponse, LastResponseContent, LastResponseRaw};
pub use screenplay::{Abilities, Ability, Actor, Interaction, MissingAbility, Question};
