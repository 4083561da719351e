//! Shared helpers for org-graph-hierarchy integration tests.

#![allow(dead_code)]
