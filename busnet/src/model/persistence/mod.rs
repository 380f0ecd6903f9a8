mod persistence_error;
mod snapshot;
mod snapshot_ops;

pub use persistence_error::PersistenceError;
pub use snapshot::Snapshot;
pub use snapshot_ops::{load_from_file, read_snapshot, save_to_file, write_snapshot};
