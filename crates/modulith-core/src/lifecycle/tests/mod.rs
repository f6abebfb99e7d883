pub mod graph_tests;
