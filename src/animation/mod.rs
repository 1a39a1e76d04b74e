pub mod channel;
pub mod generator;
pub mod motion;
pub mod oscillator;
