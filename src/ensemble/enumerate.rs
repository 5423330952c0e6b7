//! Divisors and integer partitions

use crate::{MatulaError, Result};

/// All divisors of `n`, ascending; empty for 0
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut i = 1u64;
    while n > 0 && i <= n / i {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }

    small.extend(large.into_iter().rev());
    small
}

/// Partitions of `n` as non-decreasing part lists, in lexicographic order
///
/// The count grows exponentially; intended for small `n`.
pub fn partitions(n: u32) -> Vec<Vec<u32>> {
    fn extend(remaining: u32, min_part: u32, prefix: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if remaining == 0 {
            out.push(prefix.clone());
            return;
        }
        for part in min_part..=remaining {
            prefix.push(part);
            extend(remaining - part, part, prefix, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    extend(n, 1, &mut Vec::new(), &mut out);
    out
}

/// Number of partitions of `n`
///
/// Fails with `Overflow` once p(n) no longer fits in `u128`, first at
/// n = 1459.
pub fn partition_count(n: u32) -> Result<u128> {
    let n = n as usize;
    let mut ways = vec![0u128; n + 1];
    ways[0] = 1;
    for part in 1..=n {
        for total in part..=n {
            // every partial sum is bounded by p(total) <= p(n)
            ways[total] = ways[total]
                .checked_add(ways[total - part])
                .ok_or_else(|| {
                    MatulaError::Overflow(format!("partition count of {} exceeds u128", n))
                })?;
        }
    }
    Ok(ways[n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(7), vec![1, 7]);
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert!(divisors(0).is_empty());
    }

    #[test]
    fn test_partitions_order() {
        assert_eq!(
            partitions(4),
            vec![vec![1, 1, 1, 1], vec![1, 1, 2], vec![1, 3], vec![2, 2], vec![4]]
        );
        assert_eq!(partitions(3).len(), 3);
        assert_eq!(partitions(0), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_partition_count_agrees() {
        for n in 0..=15 {
            assert_eq!(partition_count(n).unwrap(), partitions(n).len() as u128);
        }
        assert_eq!(partition_count(100).unwrap(), 190_569_292);
    }

    #[test]
    fn test_partition_count_overflow() {
        assert!(partition_count(1_458).is_ok());
        assert!(matches!(
            partition_count(1_459),
            Err(MatulaError::Overflow(_))
        ));
        assert!(matches!(
            partition_count(5_000),
            Err(MatulaError::Overflow(_))
        ));
    }
}
