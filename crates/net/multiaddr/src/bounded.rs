//! Bounded narrowing of byte windows.
//!
//! The decoder claims each segment's value through these helpers so a
//! converter only ever sees exactly the declared number of bytes and cannot
//! read into an adjacent segment. Over-long requests fail; they are never
//! silently clamped, since a clamped window would fabricate field contents.

/// A narrowing request exceeded the window's current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot narrow a {available}-byte window to {requested} bytes")]
pub struct BoundsError {
    /// Length that was requested.
    pub requested: usize,
    /// Length the window actually had.
    pub available: usize,
}

/// Narrows `window` in place to its first `len` bytes.
///
/// Fails without touching `window` when `len` exceeds the current length.
pub fn narrow(window: &mut &[u8], len: usize) -> Result<(), BoundsError> {
    match window.get(..len) {
        Some(head) => {
            *window = head;
            Ok(())
        }
        None => Err(BoundsError {
            requested: len,
            available: window.len(),
        }),
    }
}

/// Claims the first `len` bytes of `window`, advancing it past them.
///
/// Same bounds rule as [`narrow`]: `window` is untouched on failure.
pub fn claim<'a>(window: &mut &'a [u8], len: usize) -> Result<&'a [u8], BoundsError> {
    let mut head = *window;
    narrow(&mut head, len)?;
    // narrow proved len <= window.len()
    *window = window.get(len..).unwrap_or(&[]);
    Ok(head)
}
