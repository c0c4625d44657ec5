//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{GenerateError, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator slot, which stays empty until the
/// generator is successfully initialized.
fn lock_global_gen() -> sync::MutexGuard<'static, Option<GlobalGenInner>> {
    static G: sync::Mutex<Option<GlobalGenInner>> = sync::Mutex::new(None);
    // the guarded state is a plain RNG that a panicking holder cannot leave inconsistent
    G.lock().unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide generator shared by all threads. On Unix, this function
/// resets the generator when the process ID changes (i.e., upon process forks) to prevent
/// collisions across processes.
///
/// # Errors
///
/// Returns [`GenerateError`] if the operating system random source cannot seed the generator.
/// The initialization is retried on the next call.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid4::uuid4()?.to_string();
/// # Ok::<(), uuid4::GenerateError>(())
/// ```
pub fn uuid4() -> Result<Uuid, GenerateError> {
    let mut slot = lock_global_gen();
    let inner = match slot.take() {
        Some(inner) if !inner.is_stale() => slot.insert(inner),
        _ => slot.insert(GlobalGenInner::try_new()?),
    };
    inner.generator.generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, GenerateError, V4Generator};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        pub generator: V4Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        /// Seeds a new generator from [`OsRng`].
        pub fn try_new() -> Result<Self, GenerateError> {
            let core = ChaCha12Core::from_rng(OsRng).map_err(|err| {
                tracing::error!(error = %err, "could not seed global generator");
                GenerateError::from(err)
            })?;
            tracing::debug!("initialized global UUIDv4 generator");
            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V4Generator::with_rand08(ReseedingRng::new(core, 1024 * 64, OsRng)),
            })
        }

        /// Returns true if the generator was created by another process (i.e., before a fork).
        pub fn is_stale(&self) -> bool {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(pid = self.pid, "process ID changed; resetting global generator");
                return true;
            }
            false
        }
    }
}
