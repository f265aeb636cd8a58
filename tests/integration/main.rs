//! Integration tests for the library catalog server

mod support;
