mod introspect_tests;
