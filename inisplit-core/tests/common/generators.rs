//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

/// Expected contents of a generated document: every entry the parser
/// should keep, in file order.
#[derive(Debug, Default)]
pub struct Model {
    pub entries: Vec<(String, String, Vec<u8>)>,
}

impl Model {
    /// First entry matching case-insensitively, like the parser.
    pub fn lookup(&self, section: Option<&str>, key: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(s, k, _)| {
                section.map_or(true, |want| want.eq_ignore_ascii_case(s)) && key.eq_ignore_ascii_case(k)
            })
            .map(|(_, _, v)| v.as_slice())
    }
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("INISPLIT_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    /// Returns 0, 1, 2, ... with decreasing probability
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Poisson-like count (simplified)
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    fn pick(&mut self, chars: &[u8]) -> u8 {
        chars[self.rng.gen_range(0..chars.len())]
    }

    /// Random key or section name: a letter, then letters, digits, `-`, `_`, `.`
    pub fn name(&mut self) -> String {
        let len = 1 + self.geometric(0.7);
        let mut name = String::with_capacity(len);
        name.push(self.pick(b"abcdefghijklmnopqrstuvwxyz") as char);
        for _ in 1..len {
            name.push(self.pick(b"abcdefghijklmnopqrstuvwxyz0123456789-_.") as char);
        }
        name
    }

    /// Flip the ASCII case of random letters.
    pub fn recase(&mut self, name: &str) -> String {
        name.chars()
            .map(|c| if self.chance(0.3) { flip_case(c) } else { c })
            .collect()
    }

    /// Random unquoted value: no leading/trailing blanks, may contain inner
    /// spaces and `=`.
    pub fn bare_value(&mut self) -> Vec<u8> {
        let len = 1 + self.geometric(0.8);
        let mut val = Vec::with_capacity(len);
        val.push(self.pick(b"abcdefghijklmnopqrstuvwxyz0123456789-_.[]"));
        for _ in 1..len {
            val.push(self.pick(b"abcdefghijklmnopqrstuvwxyzABC0123456789-_.= "));
        }
        while val.last() == Some(&b' ') {
            val.pop();
        }
        val
    }

    /// Random integer literal
    pub fn integer(&mut self) -> Vec<u8> {
        let val: i64 = self.rng.gen_range(-999_999..999_999);
        val.to_string().into_bytes()
    }

    /// Random quoted value. Returns (source text with quotes, decoded bytes).
    pub fn quoted(&mut self) -> (Vec<u8>, Vec<u8>) {
        let len = 1 + self.geometric(0.8);
        let mut source = vec![b'"'];
        let mut decoded = Vec::with_capacity(len);

        for _ in 0..len {
            match self.rng.gen_range(0..10) {
                0 => {
                    let (esc, out) = [(b'n', b'\n'), (b't', b'\t'), (b'r', b'\r'), (b'"', b'"'), (b'\\', b'\\')]
                        [self.rng.gen_range(0..5)];
                    source.extend([b'\\', esc]);
                    decoded.push(out);
                }
                1 => {
                    // Unknown escape: the backslash is dropped.
                    let c = self.pick(b"aqz0;=[");
                    source.extend([b'\\', c]);
                    decoded.push(c);
                }
                _ => {
                    let c = self.pick(b"abcdefghij XYZ;=[]#");
                    source.push(c);
                    decoded.push(c);
                }
            }
        }

        source.push(b'"');
        if self.chance(0.2) {
            source.extend(b" trailing junk");
        }
        (source, decoded)
    }

    /// Indentation applied to every line (geometric, α=0.5)
    pub fn indent(&mut self) -> Vec<u8> {
        (0..self.geometric(0.5))
            .map(|_| if self.chance(0.8) { b' ' } else { b'\t' })
            .collect()
    }

    /// Blank and comment lines (usually none)
    pub fn filler_lines(&mut self, eol: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for _ in 0..self.geometric(0.2) {
            if self.chance(0.5) {
                out.extend(b"; ");
                out.extend(self.name().as_bytes());
                out.extend(b" = ignored");
            }
            out.extend(eol);
        }
        out
    }

    /// A line the tokenizer must discard, without its line ending.
    pub fn malformed_line(&mut self) -> Vec<u8> {
        match self.rng.gen_range(0..4) {
            0 => self.name().into_bytes(),
            1 => format!("{} =", self.name()).into_bytes(),
            2 => format!("{} = \"\"", self.name()).into_bytes(),
            _ => format!("= {}", self.name()).into_bytes(),
        }
    }

    /// An unrelated section whose names cannot collide with fixture names.
    pub fn noise_section(&mut self, eol: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(format!("[zz_noise_{}]", self.name()).as_bytes());
        out.extend(eol);
        for _ in 0..1 + self.geometric(0.5) {
            out.extend(format!("zz_noise_{} = ", self.name()).as_bytes());
            out.extend(self.bare_value());
            out.extend(eol);
        }
        out
    }

    /// Random document plus the entries the parser must produce from it.
    pub fn document(&mut self) -> (Vec<u8>, Model) {
        let mut out = Vec::new();
        let mut model = Model::default();
        let mut section = String::new();
        let mut keys: Vec<String> = Vec::new();

        for _ in 0..self.poisson(12.0) {
            match self.rng.gen_range(0..10) {
                0 => {
                    section = self.name();
                    out.extend(format!("[{}]", self.recase(&section)).as_bytes());
                }
                1 => out.extend(self.malformed_line()),
                2 => out.extend(b"; comment = not a key"),
                _ => {
                    // Reuse an earlier key sometimes so duplicates get shadowed.
                    let key = if !keys.is_empty() && self.chance(0.3) {
                        keys[self.rng.gen_range(0..keys.len())].clone()
                    } else {
                        let key = self.name();
                        keys.push(key.clone());
                        key
                    };
                    out.extend(self.recase(&key).as_bytes());
                    out.extend(self.indent());
                    out.push(b'=');
                    out.extend(self.indent());

                    let value = match self.rng.gen_range(0..3) {
                        0 => {
                            let (source, decoded) = self.quoted();
                            out.extend(source);
                            decoded
                        }
                        1 => {
                            let value = self.integer();
                            out.extend(&value);
                            value
                        }
                        _ => {
                            let value = self.bare_value();
                            out.extend(&value);
                            out.extend(self.indent());
                            value
                        }
                    };
                    model.entries.push((section.clone(), key, value));
                }
            }
            out.extend(if self.chance(0.2) { &b"\r\n"[..] } else { &b"\n"[..] });
        }

        (out, model)
    }
}

fn flip_case(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.name(), g2.name());
            assert_eq!(g1.geometric(0.9), g2.geometric(0.9));
        }
    }

    #[test]
    fn test_quoted_never_empty() {
        let mut gen = Gen::new(7);
        for _ in 0..100 {
            let (source, decoded) = gen.quoted();
            assert!(!decoded.is_empty());
            assert!(source.len() > decoded.len());
        }
    }
}
