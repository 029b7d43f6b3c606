mod error;
mod support;
