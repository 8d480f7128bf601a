//! Guard helpers shared by the delegable vault crates.
//!
//! Every check takes the error to return on failure, so callers decide which
//! error kind a failed guard surfaces as.

/// Compares two byte strings of an expected length.
#[inline(always)]
pub fn assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    left.len() == len && right.len() == len && left == right
}

macro_rules! check {
  ($func_name:ident, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E>($($param: $type,)* error: E) -> Result<(), E> {
          if $check {
              Ok(())
          } else {
              Err(error)
          }
      }
  };
}

macro_rules! check_return {
  ($func_name:ident, $return_type:ty, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E>($($param: $type,)* error: E) -> Result<$return_type, E> {
          match $check {
              Some(value) => Ok(value),
              None => Err(error),
          }
      }
  };
}

check!(check_condition, condition: bool |
  condition
);

check!(check_bytes_match, left: &[u8], right: &[u8], len: usize |
  assert_bytes_eq(left, right, len)
);

check!(check_not_expired, expiry: u64, now: u64 |
  expiry > now
);

// Returns what is left after taking `amount` out of `available`.
check_return!(check_sufficient, u128, available: u128, amount: u128 |
  available.checked_sub(amount)
);

// Returns the new total after adding `amount`.
check_return!(check_no_overflow, u128, current: u128, amount: u128 |
  current.checked_add(amount)
);

check_return!(check_increment, u64, current: u64 |
  current.checked_add(1)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Denied;

    #[test]
    fn test_bytes_match_requires_length() {
        assert!(check_bytes_match(&[1, 2, 3], &[1, 2, 3], 3, Denied).is_ok());
        assert_eq!(check_bytes_match(&[1, 2, 3], &[1, 2, 4], 3, Denied), Err(Denied));
        assert_eq!(check_bytes_match(&[1, 2], &[1, 2], 3, Denied), Err(Denied));
    }

    #[test]
    fn test_not_expired_is_strict() {
        assert!(check_not_expired(11, 10, Denied).is_ok());
        assert_eq!(check_not_expired(10, 10, Denied), Err(Denied));
        assert_eq!(check_not_expired(0, 0, Denied), Err(Denied));
    }

    #[test]
    fn test_sufficient_returns_remainder() {
        assert_eq!(check_sufficient(1000, 400, Denied), Ok(600));
        assert_eq!(check_sufficient(1000, 1000, Denied), Ok(0));
        assert_eq!(check_sufficient(999, 1000, Denied), Err(Denied));
    }

    #[test]
    fn test_overflow_guards() {
        assert_eq!(check_no_overflow(1, 2, Denied), Ok(3));
        assert_eq!(check_no_overflow(u128::MAX, 1, Denied), Err(Denied));
        assert_eq!(check_increment(7, Denied), Ok(8));
        assert_eq!(check_increment(u64::MAX, Denied), Err(Denied));
    }
}
