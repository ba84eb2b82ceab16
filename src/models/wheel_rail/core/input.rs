mod creepage;
mod material;
mod tangential;

pub use creepage::Creepage;
pub use material::Material;
pub use tangential::TangentialInputs;
