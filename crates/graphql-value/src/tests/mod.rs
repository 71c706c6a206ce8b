mod coerce_tests;
mod json_tests;
