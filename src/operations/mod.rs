pub mod assembly;
pub mod segment;
pub mod stack;
pub mod transform;
