mod fragment_validation_tests;
