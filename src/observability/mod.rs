//! Tracing setup with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → rotating JSON file
//! ```
//!
//! Spans are written as OTLP/JSON lines to
//! `<data_dir>/prayer-deck/prayer-deck-otlp.json` (see
//! [`crate::infrastructure::get_data_dir`]), rotated at 5 MB with three
//! backups.
//!
//! # Modules
//!
//! - `init`: Subscriber installation
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP/JSON encoding
//! - `file_writer`: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
