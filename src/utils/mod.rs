pub mod letters;
pub mod seed;
