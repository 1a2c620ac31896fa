mod test_bezier_basic;
mod test_catmull_rom_basic;
mod test_shape_basic;
