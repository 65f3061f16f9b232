//! Concrete games built on the engine.
//!
//! - `cloud`: the AWS cloud architecture deckbuilder

pub mod cloud;
