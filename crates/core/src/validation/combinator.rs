//! Merging two rules over the same value when the caller cannot tell
//! which one applies.

use crate::types::Verdict;

/// Separator placed between the two messages when both rules fail.
pub const MESSAGE_SEPARATOR: &str = " \n ";

/// Valid if either verdict is valid; otherwise both messages joined
/// with [`MESSAGE_SEPARATOR`].
pub fn try_either(first: Verdict, second: Verdict) -> Verdict {
    try_either_with(first, second, |a, b| format!("{a}{MESSAGE_SEPARATOR}{b}"))
}

/// Like [`try_either`], with a caller-supplied way of combining the two
/// rejection messages.
pub fn try_either_with(
    first: Verdict,
    second: Verdict,
    combine: impl FnOnce(String, String) -> String,
) -> Verdict {
    match (first, second) {
        (Verdict::Invalid(a), Verdict::Invalid(b)) => Verdict::Invalid(combine(a, b)),
        _ => Verdict::Valid,
    }
}
