use chrono::{DateTime, Utc};
use core::fmt::Write;
use heapless::String as HeaplessString;
use rand::Rng;
use trade_desk_api::{ApiError, ApiResult};

pub type ReferenceNumber = HeaplessString<32>;

pub const REFERENCE_SUFFIX_LEN: usize = 4;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TIME_DIGITS_MODULUS: i64 = 100_000_000;

/// Builds `{prefix}-{last 8 digits of unix millis}-{4 random alphanumerics}`.
///
/// Depends only on `now` and `rng`; the same inputs always give the same
/// reference. Uniqueness is the caller's concern.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use rand::{rngs::StdRng, SeedableRng};
/// use trade_desk_memory::service::submission::generate_reference;
///
/// let now = Utc.timestamp_millis_opt(1_718_000_123_456).unwrap();
/// let reference = generate_reference("TRD", now, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert!(reference.starts_with("TRD-00123456-"));
/// assert_eq!(reference.len(), "TRD-00123456-".len() + 4);
/// ```
pub fn generate_reference<R: Rng + ?Sized>(
    prefix: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ApiResult<ReferenceNumber> {
    let time_digits = now.timestamp_millis().rem_euclid(TIME_DIGITS_MODULUS);

    let mut reference = ReferenceNumber::new();
    write!(reference, "{prefix}-{time_digits:08}-").map_err(|_| {
        ApiError::InternalError(format!("reference prefix '{prefix}' is too long"))
    })?;
    for _ in 0..REFERENCE_SUFFIX_LEN {
        let c = SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char;
        reference
            .push(c)
            .map_err(|_| ApiError::InternalError("reference number overflow".to_string()))?;
    }
    Ok(reference)
}
