use uuid::Uuid;

const UID_LENGTH: usize = 4;
// 36^4
const UID_SPACE: u32 = 1_679_616;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a short random id of four lowercase base-36 characters.
///
/// Ids are not unique and not suitable for anything security related;
/// they only make collisions between a handful of ids unlikely.
///
/// ```rust
/// let uid = microlib_utils::make_uid();
/// assert_eq!(uid.len(), 4);
/// assert!(uid.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
/// ```
pub fn make_uid() -> String {
    uid_from_fraction(random_fraction())
}

/// Turn a fraction in `[0, 1)` into a four character id.
///
/// The fraction is scaled to `36^4`, truncated, written in base 36 and
/// padded with leading zeros. Only the last four characters are kept, so
/// out of range input still gives four characters.
///
/// ```rust
/// use microlib_utils::uid_from_fraction;
///
/// assert_eq!(uid_from_fraction(0.0), "0000");
/// assert_eq!(uid_from_fraction(0.5), "i000");
/// ```
pub fn uid_from_fraction(fraction: f64) -> String {
    // float to int casts saturate; NaN becomes 0
    let value = (fraction * UID_SPACE as f64) as u32;
    let padded = format!("{:0>width$}", to_base36(value), width = UID_LENGTH);
    padded[padded.len() - UID_LENGTH..].to_string()
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // only ASCII digits were pushed
    digits.into_iter().map(char::from).collect()
}

// A v4 UUID carries 122 random bits; the top 48 are all random.
fn random_fraction() -> f64 {
    let bits = (Uuid::new_v4().as_u128() >> 80) as u64;
    bits as f64 / (1u64 << 48) as f64
}
