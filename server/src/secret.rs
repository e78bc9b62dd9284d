//! # Debug pin
//!
//! A fresh diagnostic pin is generated on every start and written,
//! obfuscated, to a fixed file inside the secret directory so an operator
//! can retrieve it out of band. The process never reads it back.
//!
//! The obfuscation (base64, reverse, hex) is trivially reversible. It only
//! keeps the raw pin out of plaintext at rest; it is not encryption.

use std::{io, path::Path};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use tokio::fs;

/// Generate a nine-digit diagnostic pin, grouped like `123-456-789`.
pub fn generate_pin<R: Rng>(rng: &mut R) -> String {
    let mut pin = String::with_capacity(11);

    for position in 0..9 {
        if position > 0 && position % 3 == 0 {
            pin.push('-');
        }
        pin.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    pin
}

/// Obfuscate a secret: base64-encode it, reverse the encoded characters,
/// then hex-encode the reversed text.
pub fn obfuscate(secret: &str) -> String {
    let encoded = STANDARD.encode(secret.as_bytes());
    let reversed: String = encoded.chars().rev().collect();

    hex::encode(reversed.as_bytes())
}

/// Overwrite `path` with the obfuscated pin. Called once at startup; a
/// failure here is fatal to the caller.
pub async fn write_pin_file(path: &Path, pin: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    fs::write(path, obfuscate(pin)).await
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    use super::{generate_pin, obfuscate, write_pin_file};

    #[test]
    fn test_pin_shape() {
        let pin = generate_pin(&mut rand::rng());

        assert_eq!(pin.len(), 11);
        assert_eq!(&pin[3..4], "-");
        assert_eq!(&pin[7..8], "-");
        assert!(pin
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 3 || i == 7 { c == '-' } else { c.is_ascii_digit() }));
    }

    #[test]
    fn test_pin_uses_injected_rng() {
        let a = generate_pin(&mut StdRng::seed_from_u64(3));
        let b = generate_pin(&mut StdRng::seed_from_u64(3));

        assert_eq!(a, b);
    }

    #[test]
    fn test_obfuscate_known_vector() {
        // base64("test") = "dGVzdA==", reversed = "==AdzVGd"
        assert_eq!(obfuscate("test"), "3d3d41647a564764");
    }

    #[test]
    fn test_obfuscate_length_invariant() {
        for secret in ["a", "123-456-789", "longer secret value"] {
            let encoded_len = STANDARD.encode(secret.as_bytes()).len();
            let obfuscated = obfuscate(secret);

            assert_eq!(obfuscated.len(), 2 * encoded_len);
            assert!(obfuscated.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[tokio::test]
    async fn test_pin_file_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pin.txt");

        write_pin_file(&path, "111-111-111").await.unwrap();
        write_pin_file(&path, "222-222-222").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, obfuscate("222-222-222"));
    }

    #[tokio::test]
    async fn test_creates_missing_secret_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secret").join("pin.txt");

        write_pin_file(&path, "123-456-789").await.unwrap();

        assert!(path.is_file());
    }
}
