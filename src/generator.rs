//! UUIDv4 generator and related types.

#[cfg(not(feature = "std"))]
use core as std;

use crate::Uuid;
use std::num::NonZeroU32;

pub mod with_rand08;

/// A trait that defines the minimum random byte source interface for [`V4Generator`].
///
/// Implementors are expected to be cryptographically secure and to report an unavailable or
/// exhausted source as an error instead of filling `dest` with predictable data.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError>;
}

/// Represents a UUIDv4 generator that draws random bytes from a [`RandSource`].
///
/// This type holds no lock. The following example shares one generator across threads using
/// Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid4::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random byte source used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the random source fails to provide 16 bytes.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let mut bytes = [0u8; 16];
        if let Err(err) = self.rng.try_fill_bytes(&mut bytes) {
            tracing::error!(code = ?err.code(), "random source failed");
            return Err(err);
        }
        Ok(Uuid::from_random_bytes_v4(bytes))
    }
}

/// Error generating a UUID because the random source could not provide random bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("random source unavailable")]
pub struct GenerateError {
    code: Option<NonZeroU32>,
}

impl GenerateError {
    /// Creates an error object, optionally with a numeric code reported by the random source.
    pub const fn new(code: Option<NonZeroU32>) -> Self {
        Self { code }
    }

    /// Returns the numeric code reported by the random source, if any.
    pub const fn code(&self) -> Option<NonZeroU32> {
        self.code
    }
}
