//! Parallel batch transforms (`batch-ops` feature).

use rayon::prelude::*;

use crate::engine::{transform, Direction};
use crate::key::Key;
use crate::VigenereError;

/// Encrypt every message with the same key, in parallel.
///
/// The key is validated once up front; output order matches input order.
pub fn encrypt_batch<M>(messages: &[M], key: &str) -> Result<Vec<String>, VigenereError>
where
    M: AsRef<str> + Sync,
{
    transform_batch(messages, key, Direction::Encrypt)
}

/// Decrypt every message with the same key, in parallel.
pub fn decrypt_batch<M>(messages: &[M], key: &str) -> Result<Vec<String>, VigenereError>
where
    M: AsRef<str> + Sync,
{
    transform_batch(messages, key, Direction::Decrypt)
}

fn transform_batch<M>(
    messages: &[M],
    key: &str,
    direction: Direction,
) -> Result<Vec<String>, VigenereError>
where
    M: AsRef<str> + Sync,
{
    let key = Key::new(key)?;
    Ok(messages
        .par_iter()
        .map(|message| transform(message.as_ref(), &key, direction))
        .collect())
}
