use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Byte capacity that holds any `chars`-character UTF-8 string.
///
/// Column widths count characters while `heapless::String` counts bytes.
pub const fn utf8_capacity(chars: usize) -> usize {
    chars * 4
}

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// The CBOR encoding is deterministic and the seed is fixed to 0, so the
/// hash is stable across runs and hosts.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}
