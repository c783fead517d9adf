//! Minute-rollover prediction for the HH:MM digit slots.

/// Returns, for each digit slot, whether its value will change when the
/// displayed minute next rolls over.
///
/// `digits` are the big-endian HH:MM digits currently shown (index 0 =
/// tens-of-hour .. index 3 = ones-of-minute), read at second 59 before the
/// rollover. The three hour patterns are the only 24-hour carries that touch
/// the tens-of-hour digit: 09->10, 19->20 and 23->00.
pub fn digits_that_will_change(digits: [u8; 4]) -> [bool; 4] {
    let [tens_hour, ones_hour, tens_min, ones_min] = digits;
    let minute_rolls = tens_min == 5 && ones_min == 9;
    let hour_carries = minute_rolls && matches!((tens_hour, ones_hour), (0, 9) | (1, 9) | (2, 3));
    [hour_carries, minute_rolls, ones_min == 9, true]
}
