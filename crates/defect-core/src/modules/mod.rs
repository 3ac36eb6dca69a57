pub mod material;
pub mod report;
pub mod serialization;

pub use material::{DerivedRates, MaterialDeck, MaterialInputs, MaterialProperties};
