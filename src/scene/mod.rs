pub mod atmosphere;
pub mod capability;
pub mod composer;
pub mod frame;
pub mod lighting;
