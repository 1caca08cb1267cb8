mod integration_tests;
mod meta_extractor_tests;
