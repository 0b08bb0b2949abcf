mod executable_document_builder_tests;
mod operation_tests;
