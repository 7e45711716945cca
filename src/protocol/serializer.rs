//! Serialization driver: alokasi buffer sebesar `root.size()` lalu `pack`.

use tracing::{debug, error};

use super::node::Pack;
use crate::core::{Encoder, Error, Result};

/// Serialize satu tree ke buffer baru yang panjangnya tepat `root.size()`.
pub fn serialize<N: Pack + ?Sized>(root: &N) -> Result<Vec<u8>> {
    let expected = root.size();
    let mut encoder = Encoder::new(expected);

    root.pack(&mut encoder)?;

    let written = encoder.position();
    if written != expected {
        error!(root = root.name(), expected, written, "buffer not filled exactly");
        debug_assert_eq!(written, expected, "cursor must end at buffer length");
        return Err(Error::InvalidSizeAccounting { expected, written });
    }

    debug!(root = root.name(), bytes = written, "tree serialized");
    Ok(encoder.into_inner())
}

/// Serialize beberapa tree berurutan ke satu buffer, tanpa separator.
pub fn serialize_all<N: Pack>(roots: &[N]) -> Result<Vec<u8>> {
    let total = roots
        .iter()
        .try_fold(0usize, |acc, root| acc.checked_add(root.size()))
        .ok_or(Error::SizeOverflow { size: usize::MAX })?;

    let mut encoder = Encoder::new(total);
    for root in roots {
        root.pack(&mut encoder)?;
    }

    let written = encoder.position();
    if written != total {
        error!(roots = roots.len(), expected = total, written, "buffer not filled exactly");
        debug_assert_eq!(written, total, "cursor must end at buffer length");
        return Err(Error::InvalidSizeAccounting {
            expected: total,
            written,
        });
    }

    debug!(roots = roots.len(), bytes = written, "trees serialized");
    Ok(encoder.into_inner())
}
