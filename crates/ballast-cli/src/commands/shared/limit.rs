/// Compute effective row limit with precedence: global flag -> config fallback.
#[must_use]
pub fn effective_limit(flag: Option<u32>, fallback: u32) -> usize {
    usize::try_from(flag.unwrap_or(fallback)).unwrap_or(usize::MAX)
}
