pub mod score;
pub mod validation;
