use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest and largest number of questions in a random quiz.
pub const QUIZ_MIN_QUESTIONS: usize = 5;
pub const QUIZ_MAX_QUESTIONS: usize = 10;

/// Draws up to `count` items without replacement, in random order.
///
/// When the pool holds no more than `count` items it is returned as is,
/// keeping the storage order.
pub fn sample<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    if pool.len() <= count {
        return pool;
    }
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Picks how many questions a random quiz should have.
pub fn quiz_length<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(QUIZ_MIN_QUESTIONS..=QUIZ_MAX_QUESTIONS)
}

/// Draws a random quiz: between [`QUIZ_MIN_QUESTIONS`] and
/// [`QUIZ_MAX_QUESTIONS`] questions, fewer if the pool is smaller.
pub fn pick_quiz<T, R: Rng + ?Sized>(pool: Vec<T>, rng: &mut R) -> Vec<T> {
    let count = quiz_length(rng);
    sample(pool, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn small_pool_is_returned_whole_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample(vec![1, 2, 3], 10, &mut rng), vec![1, 2, 3]);
        assert_eq!(sample(vec![1, 2, 3], 3, &mut rng), vec![1, 2, 3]);
    }

    #[test]
    fn empty_pool_gives_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(sample(Vec::<u32>::new(), 5, &mut rng).is_empty());
    }

    #[test]
    fn zero_count_gives_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample((0..20).collect::<Vec<_>>(), 0, &mut rng).is_empty());
    }

    #[test]
    fn sample_is_distinct_subset_of_requested_size() {
        let pool: Vec<u32> = (0..50).collect();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample(pool.clone(), 7, &mut rng);
            assert_eq!(picked.len(), 7);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 7);
            assert!(picked.iter().all(|x| pool.contains(x)));
        }
    }

    #[test]
    fn sample_order_varies() {
        let pool: Vec<u32> = (0..50).collect();
        let firsts: HashSet<u32> = (0..50)
            .map(|seed| sample(pool.clone(), 5, &mut StdRng::seed_from_u64(seed))[0])
            .collect();
        assert!(firsts.len() > 1);
    }

    #[test]
    fn quiz_length_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let lengths: HashSet<usize> = (0..1000).map(|_| quiz_length(&mut rng)).collect();
        assert!(lengths
            .iter()
            .all(|k| (QUIZ_MIN_QUESTIONS..=QUIZ_MAX_QUESTIONS).contains(k)));
        assert_eq!(lengths.len(), QUIZ_MAX_QUESTIONS - QUIZ_MIN_QUESTIONS + 1);
    }

    #[test]
    fn quiz_is_bounded_by_pool_and_range() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quiz = pick_quiz((0..24).collect::<Vec<u32>>(), &mut rng);
            assert!((QUIZ_MIN_QUESTIONS..=QUIZ_MAX_QUESTIONS).contains(&quiz.len()));

            let small = pick_quiz(vec![1, 2, 3], &mut rng);
            assert_eq!(small, vec![1, 2, 3]);
        }
    }
}
