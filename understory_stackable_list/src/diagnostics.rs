// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory diagnostics for misuse.
//!
//! Nothing in this crate fails. Misuse is reported as a [`Diagnostic`],
//! logged with `tracing`, handed to the list view's [`DiagnosticSink`], and
//! kept as the most recent diagnostic.

use alloc::vec::Vec;
use core::fmt;

use crate::types::Position;

/// A misuse the list view noticed and tolerated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A slot was written without going through the view lists.
    ///
    /// The write went through, and the slot is no longer tracked until its view
    /// list is assigned again.
    DirectSlotWrite {
        /// The slot that was written.
        position: Position,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectSlotWrite {
                position: Position::Header,
            } => f.write_str(
                "Warning: Do not set the header slot directly, add your view to `header_views` instead.",
            ),
            Self::DirectSlotWrite {
                position: Position::Footer,
            } => f.write_str(
                "Warning: Do not set the footer slot directly, add your view to `footer_views` instead.",
            ),
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    /// Called once per diagnostic, in the order they occur.
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Discards diagnostics. They are still logged and kept as the most recent.
impl DiagnosticSink for () {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Collects every diagnostic, oldest first.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(*diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn header_and_footer_messages_differ() {
        let header = Diagnostic::DirectSlotWrite {
            position: Position::Header,
        };
        let footer = Diagnostic::DirectSlotWrite {
            position: Position::Footer,
        };
        assert_ne!(header.to_string(), footer.to_string());
        assert!(header.to_string().contains("header_views"));
        assert!(footer.to_string().contains("footer_views"));
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(&Diagnostic::DirectSlotWrite {
            position: Position::Footer,
        });
        sink.report(&Diagnostic::DirectSlotWrite {
            position: Position::Header,
        });
        assert_eq!(
            sink,
            [
                Diagnostic::DirectSlotWrite {
                    position: Position::Footer
                },
                Diagnostic::DirectSlotWrite {
                    position: Position::Header
                },
            ]
        );
    }
}
