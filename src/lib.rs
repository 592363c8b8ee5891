//! CareerSync - Multi-step career questionnaire client
//!
//! This crate implements an eight-section questionnaire wizard that collects
//! free-text answers, submits them to a remote matching service, and renders
//! ranked career matches.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
