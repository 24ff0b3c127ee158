pub mod showcase_wedding;
pub mod starter_wedding;
