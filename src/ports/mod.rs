//! Ports Layer - Trait definitions for external collaborators
//!
//! This module defines the interfaces (ports) the surrounding application
//! must implement. Following hexagonal architecture, these traits abstract:
//! - Event delivery (toast/alert UI)
//! - The known-asset catalog (price/metadata source)

pub mod catalog;
pub mod mocks;
pub mod notifier;

pub use catalog::{AssetCatalog, AssetInfo};
pub use notifier::{Notifier, NullNotifier};
