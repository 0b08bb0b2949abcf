mod directive_evaluator_tests;
mod parallel_collection_tests;
mod type_condition_tests;
