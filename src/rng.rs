//! Process-wide random source used by [`Deck::shuffle`](crate::Deck::shuffle).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// Seed used when no OS entropy is available and no seed was set.
const FALLBACK_SEED: u64 = 0x00de_c4ad_0000_0066;

static SHUFFLE_RNG: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

/// Reseeds the random source shared by every [`Deck::shuffle`](crate::Deck::shuffle) call.
///
/// Shuffles after this call are reproducible for a given seed.
///
/// # Example
///
/// ```
/// use deckhand::{Deck, Variant, set_shuffle_seed};
///
/// set_shuffle_seed(7);
/// let mut first = Deck::new(Variant::Belote);
/// first.shuffle();
///
/// set_shuffle_seed(7);
/// let mut second = Deck::new(Variant::Belote);
/// second.shuffle();
///
/// assert_eq!(first.cards(), second.cards());
/// ```
pub fn set_shuffle_seed(seed: u64) {
    *SHUFFLE_RNG.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
}

pub(crate) fn with_shuffle_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut guard = SHUFFLE_RNG.lock();
    let rng = guard.get_or_insert_with(initial_rng);
    f(rng)
}

#[cfg(feature = "std")]
fn initial_rng() -> ChaCha8Rng {
    ChaCha8Rng::try_from_os_rng().unwrap_or_else(|_| ChaCha8Rng::seed_from_u64(FALLBACK_SEED))
}

#[cfg(not(feature = "std"))]
fn initial_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(FALLBACK_SEED)
}
