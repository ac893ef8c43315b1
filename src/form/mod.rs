//! Form view-model
//!
//! The controller never touches a UI toolkit directly. It reads field
//! values and writes results through the `PricingView` trait.

mod memory;
mod types;

pub use memory::InMemoryView;
pub use types::{
    parse_number, FieldGroup, FormSnapshot, ResultSlot, VolatilityChoice, VolatilityMode,
};

/// Trait for view-model implementations
///
/// Methods take `&self`: overlapping submissions share one view.
pub trait PricingView: Send + Sync {
    /// Current values of every form field
    fn snapshot(&self) -> FormSnapshot;
    /// Show or hide an input group
    fn set_visibility(&self, group: FieldGroup, visible: bool);
    /// Replace the text of a result slot
    fn write_result(&self, slot: ResultSlot, text: &str);
}
