//! Solorder Core Types
//!
//! This crate provides the foundational types shared by the Solorder
//! classifier and reassembler:
//!
//! - **Categories**: The closed, ordered set of member categories ([`category::Category`])
//! - **Source lines**: Raw lines addressed by their position in the input ([`source::SourceLine`])
//! - **Documents**: Lines partitioned by category ([`document::ClassifiedDocument`])

pub mod category;
pub mod document;
pub mod source;
