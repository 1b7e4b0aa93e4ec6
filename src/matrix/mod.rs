pub mod mat3;
pub mod six;
