mod selection_flow_tests;
