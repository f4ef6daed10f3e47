mod helpers;
mod test_enhance_image;
