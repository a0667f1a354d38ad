//! worm-util - Shared foundation types for the Worm toolchain
//!
//! This crate holds the pieces every Worm front-end phase needs but that
//! belong to no phase in particular:
//!
//! - [`span`] - source locations ([`Span`]) and line lookup ([`SourceFile`])
//! - [`diagnostic`] - positional error reporting ([`Diagnostic`],
//!   [`DiagnosticKind`], [`DiagnosticBuilder`], [`Handler`])
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use worm_util::{DiagnosticBuilder, DiagnosticKind, Handler, Span};
//!
//! let mut handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::new(DiagnosticKind::UnexpectedCharacter, "unexpected character '@'")
//!         .span(Span::new(4, 5, 1, 5))
//!         .build(),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].column(), 5);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticKind, Handler, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
