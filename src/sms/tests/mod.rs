//! Unit tests for the shared modem link.
