pub mod repository_tests;
