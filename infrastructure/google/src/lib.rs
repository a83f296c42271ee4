pub mod client;
pub mod image_annotator;
pub mod translator;
