//! Integration tests for buildinfo-lib.

mod format_tests;
