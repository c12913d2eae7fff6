//! Temporal precedence: which of two correlated variables happens first.
//!
//! Only observations carrying a time for both variables vote. Equal times
//! vote for neither side. A tied or empty vote orders nothing.

use std::cmp::Ordering;

use causa_core::models::Observation;

/// `Some((cause, effect))` when one variable precedes the other in a strict
/// majority of the timed observations.
pub fn order<'a>(observations: &[Observation], a: &'a str, b: &'a str) -> Option<(&'a str, &'a str)> {
    let mut a_first = 0usize;
    let mut b_first = 0usize;

    for observation in observations {
        let occurring = observation.occurring();
        if !occurring.contains(a) || !occurring.contains(b) {
            continue;
        }
        let (Some(at_a), Some(at_b)) = (observation.time_of(a), observation.time_of(b)) else {
            continue;
        };
        match at_a.cmp(&at_b) {
            Ordering::Less => a_first += 1,
            Ordering::Greater => b_first += 1,
            Ordering::Equal => {}
        }
    }

    match a_first.cmp(&b_first) {
        Ordering::Greater => Some((a, b)),
        Ordering::Less => Some((b, a)),
        Ordering::Equal => None,
    }
}
