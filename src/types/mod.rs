pub mod input;
pub mod lenient;
pub mod policy;
pub mod result;
