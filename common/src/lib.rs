pub mod bounds;
pub mod constants;
pub mod frequency;
pub mod histogram;
