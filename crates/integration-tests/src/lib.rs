//! End-to-end tests for the content pipeline, driven by scripted capabilities
