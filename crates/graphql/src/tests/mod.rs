mod facade_tests;
mod schema_fixture;
