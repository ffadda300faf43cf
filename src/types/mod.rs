//! # Types Module
//! Request configuration and the transport pass-through types

mod http;

pub use http::{RequestOptions, Response};
