use std::cell::Cell;
use std::num::Wrapping;
use std::thread_local;

/// Generates a random number in `0..n`.
pub(crate) fn random(n: u32) -> u32 {
    thread_local! {
        static RNG: Cell<Wrapping<u32>> = {
            // Seed from the address of a local; xorshift must not start at zero.
            let mut x = 0i32;
            let r = &mut x;
            let addr = r as *mut i32 as usize;
            Cell::new(Wrapping((addr as u32) | 1))
        }
    }

    RNG.with(|rng| {
        // 32-bit xorshift.
        let mut x = rng.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        rng.set(x);

        // Lemire's multiply-shift reduction into `0..n`.
        ((u64::from(x.0)).wrapping_mul(u64::from(n)) >> 32) as u32
    })
}

/// Generates a random number in `range`.
pub(crate) fn random_in(range: core::ops::Range<u32>) -> u32 {
    range.start + random(range.end.saturating_sub(range.start))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stays_in_range() {
        for _ in 0..1000 {
            assert!(random(10) < 10);
            assert!((100..254).contains(&random_in(100..254)));
        }
        assert_eq!(random(0), 0);
    }
}
