use std::cmp;
use std::fmt;
use std::num::Wrapping as w;

use rand::{Rand, Rng, SeedableRng};

use error::{Error, Result};

#[allow(bad_style)]
pub type w32 = w<u32>;

// Mersenne Twister 19937 Constants
const MW: usize = 32;
const MU: usize = 11;
const MS: usize = 7;
const ML: usize = 18;
const MT: usize = 15;
const MN: usize = 624;
const MM: usize = 397;
const M1: w32 = w(0x1_u32);
const MA: w32 = w(0x9908B0DF_u32);
const MB: w32 = w(0x9D2C5680_u32);
const MC: w32 = w(0xEFC60000_u32);
const MF: w32 = w(0x6C078965_u32);
const MPU: w32 = w(0x80000000_u32);
const MPL: w32 = w(0x7fffffff_u32);

// init_by_array constants
const MI: w32 = w(19650218_u32);
const MK: w32 = w(1664525_u32);
const MR: w32 = w(1566083941_u32);

/// Number of state words, and the number of draws served by one twist.
pub const STATE_WORDS: usize = MN;

/// MT19937 generator seeded from an array of 32-bit words.
///
/// `i` is the forward cursor into the current batch; `i == MN` means the
/// batch is exhausted and the next draw twists first.
#[derive(Clone, PartialEq, Eq)]
pub struct MT19937Rng {
    i: usize,
    X: [w32; MN],
}

impl MT19937Rng {
    /// Seeds a new generator from `key`. The key must hold at least one word.
    pub fn new(key: &[u32]) -> Result<MT19937Rng> {
        if key.is_empty() {
            return Err(Error::InvalidSeed);
        }
        let mut rng = MT19937Rng::blank();
        rng.init_by_array(key);
        Ok(rng)
    }

    /// Reseeds in place. On error the current state is left untouched.
    pub fn reseed_words(&mut self, key: &[u32]) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidSeed);
        }
        self.init_by_array(key);
        Ok(())
    }

    /// Restores a generator from a snapshot taken with `state` and `position`.
    ///
    /// Only the top bit of `state[0]` feeds the recurrence, so a state whose
    /// other words are zero and whose `state[0]` lacks that bit is rejected.
    pub fn from_state(i: usize, state: [u32; MN]) -> Result<MT19937Rng> {
        if i > MN || ((state[0] & MPU.0) == 0 && state[1..].iter().all(|&x| x == 0)) {
            return Err(Error::InvalidState);
        }
        let mut X = [w(0_u32); MN];
        for (x, &s) in X.iter_mut().zip(state.iter()) {
            *x = w(s);
        }
        Ok(MT19937Rng { i: i, X: X })
    }

    pub fn state(&self) -> [u32; MN] {
        let mut out = [0_u32; MN];
        for (o, x) in out.iter_mut().zip(self.X.iter()) {
            *o = x.0;
        }
        out
    }

    pub fn position(&self) -> usize {
        self.i
    }

    /// Returns the next tempered word, twisting when the batch runs out.
    pub fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    fn blank() -> MT19937Rng {
        MT19937Rng {
            i: MN,
            X: [w(0_u32); MN],
        }
    }

    // key must be non-empty
    fn init_by_array(&mut self, key: &[u32]) {
        self.X[0] = MI;
        for j in 1..MN {
            let x_p = self.X[j - 1];
            self.X[j] = MF * (x_p ^ (x_p >> (MW - 2))) + w(j as u32);
        }

        let mut i = 1;
        let mut j = 0;
        for _ in 0..cmp::max(MN, key.len()) {
            let x_p = self.X[i - 1];
            self.X[i] = (self.X[i] ^ ((x_p ^ (x_p >> (MW - 2))) * MK))
                + w(key[j]) + w(j as u32);
            i += 1;
            j += 1;
            if i >= MN {
                self.X[0] = self.X[MN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..MN - 1 {
            let x_p = self.X[i - 1];
            self.X[i] = (self.X[i] ^ ((x_p ^ (x_p >> (MW - 2))) * MR)) - w(i as u32);
            i += 1;
            if i >= MN {
                self.X[0] = self.X[MN - 1];
                i = 1;
            }
        }

        // MSB set, so the state is never all zero
        self.X[0] = MPU;
        self.i = MN;
    }

    // Same result as indexing with (j + 1) % MN and (j + MM) % MN, split so
    // neither wraps.
    fn twist(&mut self) {
        for j in 0..MN - MM {
            let x = (self.X[j] & MPU) | (self.X[j + 1] & MPL);
            self.X[j] = self.X[j + MM] ^ twist_mix(x);
        }
        for j in MN - MM..MN - 1 {
            let x = (self.X[j] & MPU) | (self.X[j + 1] & MPL);
            self.X[j] = self.X[j + MM - MN] ^ twist_mix(x);
        }
        let x = (self.X[MN - 1] & MPU) | (self.X[0] & MPL);
        self.X[MN - 1] = self.X[MM - 1] ^ twist_mix(x);
        self.i = 0;
    }

    fn draw(&mut self) -> u32 {
        if self.i >= MN {
            self.twist();
        }
        let y = temper(self.X[self.i]);
        self.i += 1;
        y.0
    }
}

#[inline]
fn twist_mix(x: w32) -> w32 {
    (x >> 1) ^ (MA * (x & M1))
}

#[inline]
fn temper(mut y: w32) -> w32 {
    y = y ^ (y >> MU);
    y = y ^ ((y << MS) & MB);
    y = y ^ ((y << MT) & MC);
    y ^ (y >> ML)
}

impl fmt::Debug for MT19937Rng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MT19937Rng")
            .field("position", &self.i)
            .finish()
    }
}

impl Rng for MT19937Rng {
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }
}

// A bare u32 seed is the one-word key [seed].
impl SeedableRng<u32> for MT19937Rng {
    fn reseed(&mut self, seed: u32) {
        self.init_by_array(&[seed]);
    }

    fn from_seed(seed: u32) -> MT19937Rng {
        let mut rng = MT19937Rng::blank();
        rng.reseed(seed);
        rng
    }
}

impl Rand for MT19937Rng {
    fn rand<R: Rng>(rng: &mut R) -> MT19937Rng {
        let key: [u32; 4] = rng.gen();
        let mut mt = MT19937Rng::blank();
        mt.init_by_array(&key);
        mt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{weak_rng, Rng, SeedableRng};

    const REF_KEY: [u32; 4] = [0x123, 0x234, 0x345, 0x456];

    // Direct modulo-indexed form of the recurrence.
    fn twist_modulo(X: &mut [w32; MN]) {
        for j in 0..MN {
            let x = (X[j] & MPU) | (X[(j + 1) % MN] & MPL);
            X[j] = X[(j + MM) % MN] ^ (x >> 1) ^ (MA * (x & M1));
        }
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(Error::InvalidSeed, MT19937Rng::new(&[]).unwrap_err());

        let mut rng = MT19937Rng::new(&REF_KEY).unwrap();
        rng.next_u32();
        let before = rng.clone();
        assert_eq!(Err(Error::InvalidSeed), rng.reseed_words(&[]));
        assert_eq!(before, rng);
    }

    #[test]
    fn test_reference_key() {
        let mut rng = MT19937Rng::new(&REF_KEY).unwrap();
        let expected = [1067595299_u32, 955945823, 477289528, 4107218783, 4228976476];
        for &e in expected.iter() {
            assert_eq!(e, rng.next_u32());
        }
    }

    #[test]
    fn test_seeded_state() {
        let rng = MT19937Rng::new(&REF_KEY).unwrap();
        let st = rng.state();
        assert_eq!(0x80000000, st[0]);
        assert_eq!(&[1827812183_u32, 1371430253, 3559376401], &st[1..4]);
        assert_eq!(77518867, st[MN - 1]);
        assert_eq!(MN, rng.position());
    }

    #[test]
    fn test_twist_matches_modulo_form() {
        let mut rng = MT19937Rng::new(&[1, 2, 3, 4]).unwrap();
        for _ in 0..3 {
            let mut X = rng.X;
            twist_modulo(&mut X);
            rng.twist();
            assert_eq!(&X[..], &rng.X[..]);
            assert_eq!(0, rng.position());
        }
    }

    #[test]
    fn test_batch_boundary() {
        let mut rng = MT19937Rng::new(&REF_KEY).unwrap();
        rng.next_u32();
        let batch = rng.state();

        for n in 1..MN {
            assert_eq!(n, rng.position());
            rng.next_u32();
        }
        assert_eq!(MN, rng.position());
        assert_eq!(&batch[..], &rng.state()[..]);

        // 625th draw twists exactly once
        let mut X = rng.X;
        twist_modulo(&mut X);
        assert_eq!(3768408841, rng.next_u32());
        assert_eq!(1, rng.position());
        assert_eq!(&X[..], &rng.X[..]);
    }

    #[test]
    fn test_non_degenerate() {
        let mut rng = MT19937Rng::new(&[0]).unwrap();
        assert!(rng.state()[0] != 0);

        let out: Vec<u32> = (0..MN).map(|_| rng.next_u32()).collect();
        assert!(out.iter().any(|&x| x != 0));
        assert!(out.iter().any(|&x| x != out[0]));
    }

    #[test]
    fn test_temper() {
        assert_eq!(0, temper(w(0)).0);
        assert_eq!(0x00400091, temper(w(1)).0);
        assert_eq!(0x88102204, temper(MPU).0);
        assert_eq!(0x6FE01BF8, temper(w(0xFFFFFFFF)).0);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut rng = MT19937Rng::new(&REF_KEY).unwrap();
        for _ in 0..700 {
            rng.next_u32();
        }
        let mut restored = MT19937Rng::from_state(rng.position(), rng.state()).unwrap();
        assert_eq!(rng, restored);
        for _ in 0..1000 {
            assert_eq!(rng.next_u32(), restored.next_u32());
        }

        assert_eq!(Error::InvalidState,
                   MT19937Rng::from_state(MN + 1, rng.state()).unwrap_err());
        assert_eq!(Error::InvalidState,
                   MT19937Rng::from_state(0, [0_u32; MN]).unwrap_err());
    }

    #[test]
    fn test_restore_rejects_zero_recurrence() {
        // low bits of state[0] never reach the recurrence
        let mut st = [0_u32; MN];
        st[0] = 1;
        assert_eq!(Error::InvalidState, MT19937Rng::from_state(MN, st).unwrap_err());
        st[0] = 0x7FFFFFFF;
        assert_eq!(Error::InvalidState, MT19937Rng::from_state(0, st).unwrap_err());

        st[0] = 0x80000000;
        let mut rng = MT19937Rng::from_state(MN, st).unwrap();
        assert!((0..2 * MN).any(|_| rng.next_u32() != 0));

        let mut st = [0_u32; MN];
        st[MN - 1] = 1;
        let mut rng = MT19937Rng::from_state(MN, st).unwrap();
        assert!((0..2 * MN).any(|_| rng.next_u32() != 0));
    }

    #[test]
    fn test_seedable_rng() {
        let mut a = MT19937Rng::from_seed(19650218);
        let mut b = MT19937Rng::new(&[19650218]).unwrap();
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }

        a.reseed(19650218);
        assert_eq!(988895412, a.next_u32());
    }

    #[test]
    fn test_rand() {
        let mut w_rng = weak_rng();
        let mut a: MT19937Rng = w_rng.gen();
        let mut b = a.clone();
        assert_eq!(MN, a.position());
        for _ in 0..MN + 1 {
            assert_eq!(Rng::next_u32(&mut a), b.next_u32());
        }
    }

    #[test]
    fn test_debug() {
        let rng = MT19937Rng::new(&REF_KEY).unwrap();
        assert_eq!("MT19937Rng { position: 624 }", format!("{:?}", rng));
    }
}
