//! Exception-style rendering with stack frames.

use crate::{ErrorFormatter, Link, chain};
use causeway_error::CausewayResult;
use std::error::Error;
use std::fmt::Write;

/// Prefix placed before every link after the first.
const CAUSED_BY: &str = "Caused by: ";

/// Renders each link's message followed by its frames.
///
/// ```text
/// failed to process
///     at myapp::my_function (src/file.rs:123)
///     at myapp::main (src/main.rs:45)
/// Caused by: something went wrong
///     at myapp::other_function (src/file.rs:100)
/// ```
///
/// A foreign error ending the chain contributes only its text, without a
/// trailing newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultilineFormatter;

impl ErrorFormatter for MultilineFormatter {
    fn format(&self, err: &(dyn Error + 'static)) -> CausewayResult<String> {
        let mut out = String::new();
        for (index, link) in chain(err).enumerate() {
            if index > 0 {
                out.push_str(CAUSED_BY);
            }
            match link {
                Link::Traced(traced) => {
                    out.push_str(traced.message());
                    out.push('\n');
                    for frame in traced.stack().frames() {
                        // Writing into a String cannot fail.
                        let _ = writeln!(
                            out,
                            "    at {} ({}:{})",
                            frame.function(),
                            frame.file(),
                            frame.line()
                        );
                    }
                }
                Link::Foreign(foreign) => {
                    let _ = write!(out, "{}", foreign);
                }
            }
        }
        Ok(out)
    }
}
