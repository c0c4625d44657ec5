//! Integration with `rand` (v0.8) crate.

use super::{GenerateError, RandSource, V4Generator};
use rand::{CryptoRng, RngCore};

/// An adapter that implements [`RandSource`] for cryptographically secure [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore + CryptoRng> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        self.0.try_fill_bytes(dest).map_err(GenerateError::from)
    }
}

impl<T: RngCore + CryptoRng> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] and [`CryptoRng`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuid4::GenerateError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl From<rand::Error> for GenerateError {
    fn from(src: rand::Error) -> Self {
        Self::new(src.code())
    }
}
