mod argument_encoder_tests;
