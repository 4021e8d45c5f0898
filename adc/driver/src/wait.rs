//! Bounded busy-wait primitive

use pic_adc_core::{AdcError, AdcResult, WaitPolicy};

/// Spin until `done` returns true
///
/// Returns the number of unsuccessful checks made before completion, or
/// [`AdcError::Timeout`] once a bounded policy's budget of `max_polls` checks
/// is spent. [`WaitPolicy::Unbounded`] never times out.
pub fn wait_until<F>(policy: WaitPolicy, mut done: F) -> AdcResult<u32>
where
    F: FnMut() -> bool,
{
    match policy {
        WaitPolicy::Bounded { max_polls } => {
            for polls in 0..max_polls {
                if done() {
                    return Ok(polls);
                }
                core::hint::spin_loop();
            }
            Err(AdcError::Timeout)
        }
        WaitPolicy::Unbounded => {
            let mut polls: u32 = 0;
            loop {
                if done() {
                    return Ok(polls);
                }
                polls = polls.saturating_add(1);
                core::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_within_bound() {
        let mut remaining = 5;
        let result = wait_until(WaitPolicy::Bounded { max_polls: 10 }, || {
            if remaining == 0 {
                true
            } else {
                remaining -= 1;
                false
            }
        });
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn test_times_out() {
        let mut checks = 0;
        let result = wait_until(WaitPolicy::Bounded { max_polls: 10 }, || {
            checks += 1;
            false
        });
        assert_eq!(result, Err(AdcError::Timeout));
        assert_eq!(checks, 10);
    }

    #[test]
    fn test_zero_budget_times_out_immediately() {
        let result = wait_until(WaitPolicy::Bounded { max_polls: 0 }, || true);
        assert_eq!(result, Err(AdcError::Timeout));
    }

    #[test]
    fn test_unbounded() {
        let mut remaining = 50_000;
        let result = wait_until(WaitPolicy::Unbounded, || {
            remaining -= 1;
            remaining == 0
        });
        assert_eq!(result, Ok(49_999));
    }
}
