//! Span helpers for controller and collaborator operations.

use std::future::Future;
use tracing::{info_span, Instrument, Span};

/// Span for one operation of a view controller (revisions, knowledge row, measure).
pub fn component_span(component: &'static str, operation: &'static str) -> Span {
    info_span!("component", name = component, op = operation)
}

/// Span for a call into an external collaborator.
pub fn service_span(service: &'static str, operation: &'static str) -> Span {
    info_span!("service", name = service, op = operation)
}

/// Instrument a future with a span.
pub fn instrument_future<F: Future>(future: F, span: Span) -> impl Future<Output = F::Output> {
    future.instrument(span)
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) -> std::time::Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = %duration.as_micros(),
            "operation completed"
        );
        duration
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}

/// Re-export of tracing::instrument for convenience.
pub use tracing::instrument;
