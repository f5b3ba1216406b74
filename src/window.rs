use std::collections::{HashMap, VecDeque};
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::heap::MaxHeap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window: input sequence is empty")]
    EmptyInput,
    #[error("window: window size must be at least 1")]
    ZeroWindow,
    #[error("window: window size {window} exceeds input length {len}")]
    WindowTooLarge { window: usize, len: usize },
}

/// How expired values leave the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Pops the heap only when the outgoing value is the current root.
    ///
    /// A copy of an expired value buried under a larger root is never
    /// removed, so it can be reported for a later window it no longer
    /// belongs to.
    RootOnly,
    /// Counts expired values and drops them once they surface at the root.
    ///
    /// Expired values buried under a larger root stay in the heap, so on
    /// ascending input the heap grows to `O(n)` rather than `O(k)`. Use
    /// [`Strategy::Deque`] when memory has to stay bounded by the window.
    #[default]
    Lazy,
    Deque,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::RootOnly, Strategy::Lazy, Strategy::Deque];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RootOnly => "root-only",
            Strategy::Lazy => "lazy",
            Strategy::Deque => "deque",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry `i` of the result is the maximum of `nums[i..i + k]`.
pub fn max_sliding_window(nums: &[i64], k: usize) -> Result<Vec<i64>, WindowError> {
    max_sliding_window_with(nums, k, Strategy::default())
}

pub fn max_sliding_window_with(
    nums: &[i64],
    k: usize,
    strategy: Strategy,
) -> Result<Vec<i64>, WindowError> {
    validate(nums, k)?;
    debug!(%strategy, window = k, len = nums.len(), "computing sliding window maxima");
    let res = match strategy {
        Strategy::RootOnly => root_only(nums, k),
        Strategy::Lazy => lazy(nums, k),
        Strategy::Deque => deque(nums, k),
    };
    Ok(res)
}

fn validate(nums: &[i64], k: usize) -> Result<(), WindowError> {
    if nums.is_empty() {
        return Err(WindowError::EmptyInput);
    }
    if k == 0 {
        return Err(WindowError::ZeroWindow);
    }
    if k > nums.len() {
        return Err(WindowError::WindowTooLarge {
            window: k,
            len: nums.len(),
        });
    }
    Ok(())
}

fn seed(nums: &[i64], k: usize) -> MaxHeap {
    let mut heap = MaxHeap::with_capacity(nums.len());
    for &v in &nums[..k] {
        heap.push(v);
    }
    heap
}

fn root_only(nums: &[i64], k: usize) -> Vec<i64> {
    let mut heap = seed(nums, k);
    let mut res = Vec::with_capacity(nums.len() - k + 1);
    res.extend(heap.peek());
    for i in 1..=nums.len() - k {
        let expired = nums[i - 1];
        if heap.peek() == Some(expired) {
            trace!(value = expired, index = i - 1, "dropping expired root");
            heap.pop();
        }
        heap.push(nums[i + k - 1]);
        res.extend(heap.peek());
    }
    res
}

fn lazy(nums: &[i64], k: usize) -> Vec<i64> {
    let mut heap = seed(nums, k);
    // expired value -> copies still sitting in the heap
    let mut pending: HashMap<i64, usize> = HashMap::new();
    let mut res = Vec::with_capacity(nums.len() - k + 1);
    res.extend(heap.peek());
    for i in 1..=nums.len() - k {
        *pending.entry(nums[i - 1]).or_insert(0) += 1;
        heap.push(nums[i + k - 1]);
        while let Some(top) = heap.peek() {
            let Some(count) = pending.get_mut(&top) else {
                break;
            };
            *count -= 1;
            if *count == 0 {
                pending.remove(&top);
            }
            trace!(value = top, window_start = i, "dropping expired root");
            heap.pop();
        }
        res.extend(heap.peek());
    }
    res
}

fn deque(nums: &[i64], k: usize) -> Vec<i64> {
    let mut candidates: VecDeque<usize> = VecDeque::with_capacity(k);
    let mut res = Vec::with_capacity(nums.len() - k + 1);
    for (i, &v) in nums.iter().enumerate() {
        while let Some(&back) = candidates.back() {
            if nums[back] <= v {
                candidates.pop_back();
            } else {
                break;
            }
        }
        candidates.push_back(i);
        if let Some(&front) = candidates.front() {
            if front + k <= i {
                candidates.pop_front();
            }
        }
        if i + 1 >= k {
            res.extend(candidates.front().map(|&j| nums[j]));
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::{max_sliding_window, max_sliding_window_with, Strategy, WindowError};
    use proptest::prelude::*;
    use proptest::strategy::Strategy as _;

    const REFERENCE: [i64; 8] = [9, 10, 9, -7, -4, 8, 2, -6];

    fn brute_force(nums: &[i64], k: usize) -> Vec<i64> {
        nums.windows(k)
            .map(|w| *w.iter().max().unwrap())
            .collect()
    }

    #[test]
    fn test_reference_input() {
        assert_eq!(vec![10, 10, 9, 8], brute_force(&REFERENCE, 5));
        assert_eq!(Ok(vec![10, 10, 9, 8]), max_sliding_window(&REFERENCE, 5));
        assert_eq!(
            Ok(vec![10, 10, 9, 8]),
            max_sliding_window_with(&REFERENCE, 5, Strategy::Deque)
        );
    }

    #[test]
    fn test_root_only_reports_expired_duplicate() {
        // the second 9 is buried under 10 when the first 9 leaves
        assert_eq!(
            Ok(vec![10, 10, 9, 9]),
            max_sliding_window_with(&REFERENCE, 5, Strategy::RootOnly)
        );

        let nums = [3, 9, 3, 1, 1, 1];
        assert_eq!(vec![9, 9, 3, 1], brute_force(&nums, 3));
        assert_eq!(
            Ok(vec![9, 9, 3, 3]),
            max_sliding_window_with(&nums, 3, Strategy::RootOnly)
        );
        assert_eq!(Ok(vec![9, 9, 3, 1]), max_sliding_window(&nums, 3));
    }

    #[test]
    fn test_window_covers_whole_input() {
        for strategy in Strategy::ALL {
            assert_eq!(
                Ok(vec![10]),
                max_sliding_window_with(&REFERENCE, REFERENCE.len(), strategy)
            );
        }
    }

    #[test]
    fn test_all_equal() {
        let nums = [4; 9];
        for strategy in Strategy::ALL {
            for k in 1..=nums.len() {
                assert_eq!(
                    Ok(vec![4; nums.len() - k + 1]),
                    max_sliding_window_with(&nums, k, strategy)
                );
            }
        }
    }

    #[test]
    fn test_window_of_one() {
        for strategy in Strategy::ALL {
            assert_eq!(
                Ok(REFERENCE.to_vec()),
                max_sliding_window_with(&REFERENCE, 1, strategy)
            );
        }
    }

    #[test]
    fn test_negative_values_and_sentinel() {
        let nums = [-1, -1, -3, -1, -5];
        assert_eq!(Ok(vec![-1, -1, -1]), max_sliding_window(&nums, 3));
    }

    #[test]
    fn test_invalid_window() {
        assert_eq!(Err(WindowError::EmptyInput), max_sliding_window(&[], 1));
        assert_eq!(Err(WindowError::ZeroWindow), max_sliding_window(&REFERENCE, 0));
        assert_eq!(
            Err(WindowError::WindowTooLarge { window: 9, len: 8 }),
            max_sliding_window(&REFERENCE, 9)
        );
        assert_eq!(
            "window: window size 9 exceeds input length 8",
            WindowError::WindowTooLarge { window: 9, len: 8 }.to_string()
        );
    }

    #[test]
    fn test_ascending_input() {
        let nums: Vec<i64> = (0..200).collect();
        let expected: Vec<i64> = (9..200).collect();
        for strategy in Strategy::ALL {
            assert_eq!(Ok(expected.clone()), max_sliding_window_with(&nums, 10, strategy));
        }
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(vec!["root-only", "lazy", "deque"], names);
        assert_eq!(Strategy::Lazy, Strategy::default());
    }

    fn input_and_window() -> impl proptest::strategy::Strategy<Value = (Vec<i64>, usize)> {
        prop::collection::vec(-20i64..20, 1..80).prop_flat_map(|nums| {
            let n = nums.len();
            (Just(nums), 1..=n)
        })
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force((nums, k) in input_and_window()) {
            let expected = brute_force(&nums, k);
            for strategy in [Strategy::Lazy, Strategy::Deque] {
                let got = max_sliding_window_with(&nums, k, strategy).unwrap();
                prop_assert_eq!(nums.len() - k + 1, got.len());
                prop_assert_eq!(&expected, &got);
            }
        }

        #[test]
        fn prop_root_only_never_underreports((nums, k) in input_and_window()) {
            let expected = brute_force(&nums, k);
            let got = max_sliding_window_with(&nums, k, Strategy::RootOnly).unwrap();
            prop_assert_eq!(expected.len(), got.len());
            for (want, have) in expected.iter().zip(&got) {
                prop_assert!(have >= want);
            }
        }
    }
}
