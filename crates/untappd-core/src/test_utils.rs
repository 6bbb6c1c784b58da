/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use chrono::TimeDelta;

/// Default tolerance for duration comparisons, in nanoseconds
pub const DEFAULT_TOLERANCE_NANOS: i64 = 1_000;

/// Assert that two durations are within `tolerance` of each other
pub fn assert_duration_approx_eq(actual: TimeDelta, expected: TimeDelta, tolerance: TimeDelta) {
  let diff = (actual - expected).abs();
  assert!(
    diff <= tolerance,
    "Durations not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    diff,
    tolerance
  );
}

/// Assert that a duration is approximately `expected` seconds
pub fn assert_secs_eq(actual: TimeDelta, expected: f64) {
  let expected = TimeDelta::nanoseconds((expected * 1e9).round() as i64);
  assert_duration_approx_eq(actual, expected, TimeDelta::nanoseconds(DEFAULT_TOLERANCE_NANOS));
}
