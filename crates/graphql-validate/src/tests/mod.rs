mod schema_fixture;
mod validate_tests;
