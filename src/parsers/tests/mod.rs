mod scanner_tests;
