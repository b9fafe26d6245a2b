//! Report export

mod excel;

pub use excel::export_allocation_to_excel;
