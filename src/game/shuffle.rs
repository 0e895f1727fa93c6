use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly random permutation of `options`, leaving the input untouched.
///
/// Only the display order changes. Answers are judged by value, so the
/// position of the correct option carries no meaning.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(options: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = options.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
