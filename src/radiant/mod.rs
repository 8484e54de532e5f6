//! Radiant path progression - the spren-bond and ideal-speaking state
//! machine
//!
//! States run one way: Unbound -> Bound -> IdealSpoken. There is no
//! un-binding in the modeled rules; `reset` exists for administrative use.

pub mod orders;
pub mod path;

pub use orders::{order_from_id, order_info, OrderInfo, RadiantOrder, Surge, ORDER_TABLE};
pub use path::{BindOutcome, IdealOutcome, RadiantPath};
