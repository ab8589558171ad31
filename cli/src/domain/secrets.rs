//! Authentication keys and salts for `wp-config.php`.

use rand::Rng;

/// Characters a secret is drawn from.
pub const SECRET_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated secret.
pub const SECRET_LEN: usize = 64;

/// Names of the secret slots, in the order they appear in the config file.
pub const SECRET_SLOTS: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

/// One freshly generated secret per slot.
///
/// Only needs to be consistent for the lifetime of one installation; it is
/// never stored anywhere except the generated config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSecrets {
    values: [String; 8],
}

impl GeneratedSecrets {
    /// Draw all eight secrets from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            values: std::array::from_fn(|_| generate_secret(rng)),
        }
    }

    /// `(slot, value)` pairs in config-file order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SECRET_SLOTS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// A single 64-character secret over `[a-zA-Z]`.
pub fn generate_secret<R: Rng>(rng: &mut R) -> String {
    (0..SECRET_LEN)
        .map(|_| char::from(SECRET_ALPHABET[rng.gen_range(0..SECRET_ALPHABET.len())]))
        .collect()
}
