use crate::domain::model::{DisplayState, Locale, Parity};

/// Build the display state for the latest number and random value.
///
/// Returns `None` while either value is still absent: there is nothing to
/// show yet, which is not an error.
pub fn combine(number: Option<i32>, random: Option<i32>, locale: Locale) -> Option<DisplayState> {
    let (number, random) = (number?, random?);

    let result = number.wrapping_mul(random);
    let parity = Parity::of(result);

    Some(DisplayState::new(
        result.to_string(),
        locale.sentence(result, parity, random),
    ))
}
