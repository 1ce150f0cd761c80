//! Token URI composition: `base_uri` followed by the decimal id.

use lockup_common::ContractError;
use soroban_sdk::{Env, String};

/// Longest accepted base URI, in bytes.
pub const MAX_BASE_URI_LEN: u32 = 200;

/// Digits in `u64::MAX`.
const MAX_ID_DIGITS: usize = 20;

const BUF_LEN: usize = MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS;

pub fn validate_base_uri(uri: &String) -> Result<(), ContractError> {
    if uri.len() > MAX_BASE_URI_LEN {
        return Err(ContractError::BaseUriTooLong);
    }
    Ok(())
}

/// Writes `n` in base 10 at the start of `out` and returns the digit count.
fn write_decimal(mut n: u64, out: &mut [u8]) -> usize {
    let mut reversed = [0u8; MAX_ID_DIGITS];
    let mut len = 0;
    loop {
        reversed[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
        if n == 0 {
            break;
        }
    }
    for (dst, src) in out.iter_mut().zip(reversed[..len].iter().rev()) {
        *dst = *src;
    }
    len
}

/// An empty base yields an empty URI.
pub fn compose(e: &Env, base: &String, id: u64) -> Result<String, ContractError> {
    validate_base_uri(base)?;
    let base_len = base.len() as usize;
    if base_len == 0 {
        return Ok(String::from_str(e, ""));
    }

    let mut buf = [0u8; BUF_LEN];
    base.copy_into_slice(&mut buf[..base_len]);
    let digits = write_decimal(id, &mut buf[base_len..]);
    Ok(String::from_bytes(e, &buf[..base_len + digits]))
}
