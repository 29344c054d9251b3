use rand::Rng;

/// 62-symbol alphabet used for alias tokens and generated candidate ids.
pub static ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draw a token of `len` characters uniformly from [`ALPHANUMERIC`].
pub fn alphanumeric_token(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}
