//! Convokit - Conversational Agent Dataset Tooling
//!
//! This crate implements the in-memory data model for a conversational
//! agent definition (intents, tag types, actions, training conversations)
//! together with the conversion and filtering routines that turn such a
//! definition into training-ready NLU and conversation datasets.

pub mod domain;
pub mod ml;
