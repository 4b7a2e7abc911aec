//! Gift-code redemption requests and their display card.

pub mod card;

pub use card::{RedemptionCard, RedemptionRequest};
