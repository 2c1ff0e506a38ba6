pub mod entities;
pub mod seed;
pub mod validation;
