pub mod amount;
pub mod upi_reference;
