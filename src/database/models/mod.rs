pub mod remedio;
pub mod usuario;

pub use remedio::RemedioRow;
pub use usuario::Usuario;
