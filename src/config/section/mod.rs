//! Configuration section definitions.
//!
//! | Module     | TOML Section    | Purpose                          |
//! |------------|-----------------|----------------------------------|
//! | `build`    | `[build]`       | Paths, icon size, slug mode      |
//! | `provider` | `[[provider]]`  | Icon sources and their layouts   |

mod build;
mod provider;

pub use build::BuildConfig;
pub use provider::{ProviderConfig, validate_providers};
