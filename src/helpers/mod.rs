pub mod input_helper;
