//! Card system: definitions, instances, registry, and market catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (`"ec2"`, `"wa1"`)
//! - `CardDefinition`: Static card data (cost, credit or points, synergy)
//! - `CardInstance`: One physical copy of a card
//! - `CardRegistry`: Card definition lookup
//! - `MarketCatalog`: Starter card plus the cards for sale

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod registry;

pub use catalog::MarketCatalog;
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardRegistry;
