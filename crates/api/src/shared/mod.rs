pub mod references;
pub mod tombstone;
pub mod usecase;
