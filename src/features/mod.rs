pub mod regions;
pub mod selection;
