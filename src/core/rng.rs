//! Shuffling primitives.
//!
//! Shuffling is the only nondeterministic input to the engine, so every
//! shuffle goes through the [`Shuffler`] trait. Production play uses
//! [`GameRng`]; tests substitute [`Unshuffled`] or a [`PermutationFn`] to
//! pin the order down.
//!
//! ```
//! use builder_cards::core::{GameRng, Shuffler};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same permutation
//! assert_eq!(rng1.permutation(10), rng2.permutation(10));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Source of random permutations.
///
/// `permutation(len)` must return each of `0..len` exactly once.
pub trait Shuffler {
    /// Produce a permutation of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;

    /// Reorder `items` according to a fresh permutation.
    ///
    /// Item `i` of the result is item `permutation[i]` of the input.
    /// Panics if `permutation` drops, repeats, or invents an index.
    fn shuffle<T: Clone>(&mut self, items: &mut im::Vector<T>)
    where
        Self: Sized,
    {
        if items.len() < 2 {
            return;
        }

        let perm = self.permutation(items.len());
        assert!(
            is_permutation(&perm, items.len()),
            "Shuffler returned a non-permutation of {} items: {:?}",
            items.len(),
            perm
        );

        let original = items.clone();
        *items = perm.into_iter().map(|i| original[i].clone()).collect();
    }
}

fn is_permutation(perm: &[usize], len: usize) -> bool {
    if perm.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in perm {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Seedable RNG used for real games.
///
/// Uses ChaCha8 for speed while keeping a uniform shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a random seed.
    ///
    /// Games started this way are not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for GameRng {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.inner);
        order
    }
}

/// Identity shuffle: leaves every pile in its current order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unshuffled;

impl Shuffler for Unshuffled {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

/// Shuffler backed by a closure.
///
/// ```
/// use builder_cards::core::{PermutationFn, Shuffler};
///
/// // Always reverse
/// let mut reverse = PermutationFn(|len: usize| (0..len).rev().collect());
///
/// let mut pile: im::Vector<u32> = im::vector![1, 2, 3];
/// reverse.shuffle(&mut pile);
/// assert_eq!(pile, im::vector![3, 2, 1]);
/// ```
pub struct PermutationFn<F>(pub F);

impl<F> Shuffler for PermutationFn<F>
where
    F: FnMut(usize) -> Vec<usize>,
{
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (self.0)(len)
    }
}
