use rand::Rng;

/// Characters a generated stem is drawn from. Lowercase keeps names safe
/// for case-insensitive filesystems.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random stem in generated story names.
pub const STEM_LENGTH: usize = 16;

/// Build a random filename from an injected random source.
///
/// Each position of the stem is sampled independently and uniformly from
/// [`ALPHABET`], so repeated characters are expected. Uniqueness is
/// statistical only; nothing checks the result against existing files.
pub fn random_filename<R: Rng>(rng: &mut R, length: usize, extension: &str) -> String {
    let mut name = String::with_capacity(length + extension.len() + 1);

    for _ in 0..length {
        let index = rng.random_range(0..ALPHABET.len());
        name.push(ALPHABET[index] as char);
    }

    if !extension.is_empty() {
        name.push('.');
        name.push_str(extension);
    }

    name
}

/// [`random_filename`] bound to the thread-local generator.
pub fn generate(length: usize, extension: &str) -> String {
    random_filename(&mut rand::rng(), length, extension)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::{generate, random_filename, STEM_LENGTH};

    #[test]
    fn test_shape() {
        let name = generate(STEM_LENGTH, "txt");

        assert_eq!(name.len(), STEM_LENGTH + 4);
        assert!(name.ends_with(".txt"));
        assert!(name[..STEM_LENGTH]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_no_extension() {
        let name = generate(8, "");

        assert_eq!(name.len(), 8);
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_statistical_uniqueness() {
        let names: HashSet<String> = (0..10_000).map(|_| generate(STEM_LENGTH, "txt")).collect();

        assert_eq!(names.len(), 10_000);
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let a = random_filename(&mut StdRng::seed_from_u64(7), STEM_LENGTH, "txt");
        let b = random_filename(&mut StdRng::seed_from_u64(7), STEM_LENGTH, "txt");

        assert_eq!(a, b);
    }
}
