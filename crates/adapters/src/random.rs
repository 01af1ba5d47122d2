use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wardrobe_application::RandomSource;

#[derive(Debug)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn pick_index(&mut self, upper: usize) -> usize {
        // Zero is out of range for an empty catalog, which the wardrobe rejects.
        if upper == 0 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_cover_the_whole_range() {
        let mut source = StdRandomSource::seeded(0x5eed);
        let mut seen = [0_usize; 5];
        for _ in 0..1_000 {
            let index = source.pick_index(seen.len());
            assert!(index < seen.len());
            seen[index] += 1;
        }
        assert!(seen.iter().all(|count| *count > 0), "draws: {seen:?}");
    }

    #[test]
    fn same_seed_gives_same_draws() {
        let mut first = StdRandomSource::seeded(7);
        let mut second = StdRandomSource::seeded(7);
        let a: Vec<usize> = (0..20).map(|_| first.pick_index(9)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.pick_index(9)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn single_image_always_draws_zero() {
        let mut source = StdRandomSource::from_entropy();
        assert!((0..50).all(|_| source.pick_index(1) == 0));
    }
}
