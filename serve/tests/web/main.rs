//! End-to-end HTTP tests: server on 127.0.0.1:0 with a MockLlm pipeline, driven by reqwest.

mod common;
mod index;
mod init_logging;
mod static_files;
mod submit;
