pub mod chunk;
pub mod sections;
