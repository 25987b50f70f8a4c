//! Caller identity attached to every entry
//!
//! Rust has no implicit caller-name parameters, so the identity is an explicit
//! [`CallSite`] value. The [`call_site!`](crate::call_site) macro fills it from
//! `file!()` and the path of the enclosing function.

use std::borrow::Cow;
use std::path::Path;

/// Where a log call came from: the source file stem and the calling function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    source_name: Cow<'static, str>,
    caller_name: Cow<'static, str>,
}

impl CallSite {
    pub fn new(
        source_name: impl Into<Cow<'static, str>>,
        caller_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            caller_name: caller_name.into(),
        }
    }

    /// Build a call site from a `file!()` path and a function type path.
    ///
    /// `function_path` is what `std::any::type_name` reports for an item nested
    /// in the caller, e.g. `my_app::server::accept::{{closure}}::__here`. The
    /// file keeps only its stem and the function keeps its last named segment.
    pub fn from_raw(file: &'static str, function_path: &'static str) -> Self {
        Self {
            source_name: Cow::Borrowed(source_name_of(file)),
            caller_name: Cow::Borrowed(caller_name_of(function_path)),
        }
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[inline]
    pub fn caller_name(&self) -> &str {
        &self.caller_name
    }
}

/// File name without directory or extension, as used for entries and derived log names.
pub fn source_name_of(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
}

fn caller_name_of(function_path: &str) -> &str {
    let mut path = function_path.strip_suffix("::__here").unwrap_or(function_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
