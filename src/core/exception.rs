//! Text description of an error for `EXCEPTION` entries
//!
//! The description holds the error's type, its message, the chain of
//! `source()` causes and, when enabled through `RUST_BACKTRACE` or
//! `RUST_LIB_BACKTRACE`, a backtrace captured at the logging call.
//!
//! Trait objects have no useful type name, so a `dyn Error` is labelled with
//! its `Debug` form instead.

use std::any::type_name;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write;

/// Describe `error` with a backtrace captured now.
pub fn describe_error<E>(error: &E) -> String
where
    E: Error + ?Sized,
{
    describe_error_with_backtrace(error, &Backtrace::capture())
}

/// Describe `error`, appending `backtrace` only if it was actually captured.
pub fn describe_error_with_backtrace<E>(error: &E, backtrace: &Backtrace) -> String
where
    E: Error + ?Sized,
{
    let mut description = format!("{}: {}", type_label(error), error);

    let mut cause = error.source();
    while let Some(inner) = cause {
        let _ = write!(description, "\nCaused by: {}", inner);
        cause = inner.source();
    }

    if backtrace.status() == BacktraceStatus::Captured {
        let _ = write!(description, "\nStack trace:\n{}", backtrace);
    }

    description
}

fn type_label<E>(error: &E) -> String
where
    E: Error + ?Sized,
{
    let name = type_name::<E>();
    if name.starts_with("dyn ") {
        format!("{:?}", error)
    } else {
        name.to_string()
    }
}
