mod collect_tests;
mod execute_tests;
mod schema_fixture;
mod subscribe_tests;
