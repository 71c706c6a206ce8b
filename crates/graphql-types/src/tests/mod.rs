mod schema_builder_tests;
mod sdl_tests;
mod type_ref_tests;
