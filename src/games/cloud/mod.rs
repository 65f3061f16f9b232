//! Cloud architecture deckbuilder.
//!
//! The shipped game: start with 10 Starter cards, play them for credits,
//! buy AWS service cards to strengthen the deck, and buy Well-Architected
//! cards for points.
//!
//! - Starter Card: free, +1 credit
//! - Amazon EC2, Amazon S3: free, +1 credit
//! - EC2 Auto Scaling: cost 3, +1 credit, draws 1 if EC2 is already in play
//! - AWS Lambda: cost 4, +2 credits
//! - Amazon RDS: cost 5, +2 credits
//! - Well-Architected (Small): cost 3, 1 point
//! - Well-Architected (Large): cost 8, 3 points

mod game;

pub use game::{catalog, CloudGameBuilder, CATALOG_JSON};
