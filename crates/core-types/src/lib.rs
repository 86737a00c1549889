pub mod enums;
pub mod error;
pub mod parameter;
pub mod store;
pub mod value;

// Re-export the core types to provide a clean public API.
pub use enums::ParameterKey;
pub use error::CoreError;
pub use parameter::{Parameter, ParameterEdit, ParameterGroups};
pub use store::{DerivedRecord, ParameterStore};
pub use value::{ParameterValue, parse_decimal, parse_decimal_prefix};
