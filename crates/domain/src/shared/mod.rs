pub mod entity;
pub mod tombstone;
