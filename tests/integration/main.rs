//! Integration tests for the crudgate demo server.

mod helpers;
mod restful_params_test;
