mod provider;
mod record;

pub use provider::{capability_name, ProviderIndex};
pub use record::{validate_records, PackageRecord};
