mod rpmdb;
mod snapshot;

pub use rpmdb::load_installed_from_root;
pub use snapshot::load_snapshot;
