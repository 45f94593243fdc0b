//! Da Vinci Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Da Vinci
//! sub-theme scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          davinci-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SubThemeService, SubThemeGenerator)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, StarterkitStore) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     davinci-adapters (Infrastructure)   │
//! │  (LocalFilesystem, DirStarterkitStore)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (GenerationRequest, machine names,     │
//! │   replacement pairs)                    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use davinci_core::domain::GenerationRequest;
//! use davinci_core::application::SubThemeService;
//!
//! // 1. Build a validated request (defaults resolved here)
//! let request = GenerationRequest::builder("My Theme")
//!     .build(|path| path.exists())
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = SubThemeService::new(store, filesystem);
//! service.create(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CustomizeRequest, SubThemeGenerator, SubThemeService,
        ports::{Filesystem, StarterkitInfo, StarterkitStore},
    };
    pub use crate::domain::{
        GenerationRequest, GenerationRequestBuilder, is_valid_machine_name,
        label_to_machine_name,
    };
    pub use crate::error::{DaVinciError, DaVinciResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
