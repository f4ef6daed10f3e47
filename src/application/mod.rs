pub mod enhance_image;
