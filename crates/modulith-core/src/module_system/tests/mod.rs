pub mod registry_tests;
