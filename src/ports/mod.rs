pub mod member;
pub mod trainer;
