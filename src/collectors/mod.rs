pub mod capacity;
pub mod mounts;
