pub mod barcode_decoder;
pub mod loader;
