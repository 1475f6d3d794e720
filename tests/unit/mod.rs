mod concurrency_coverage_tests;
