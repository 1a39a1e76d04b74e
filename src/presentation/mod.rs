pub mod overlay;
pub mod section;
pub mod stack;
