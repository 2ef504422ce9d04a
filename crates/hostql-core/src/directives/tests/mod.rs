mod directive_tests;
