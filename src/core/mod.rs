pub mod params;
pub mod processing;
