pub mod atom;
pub mod leaflet;
