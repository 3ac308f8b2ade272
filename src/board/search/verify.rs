use crate::board::{Occupancy, Square, TourError};

/// Check that `tour` is a complete open knight's tour of a `size` board
/// beginning at `start`.
///
/// # Errors
/// The first defect found, scanning from the start square.
pub fn verify_tour(size: usize, start: Square, tour: &[Square]) -> Result<(), TourError> {
    let expected = size * size;
    if tour.first() != Some(&start) {
        return Err(TourError::WrongStart {
            expected: start,
            found: tour.first().copied(),
        });
    }
    if tour.len() != expected {
        return Err(TourError::WrongLength {
            expected,
            found: tour.len(),
        });
    }

    let mut seen = Occupancy::new(size);
    for (step, pair) in tour.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        if step == 0 && !seen.mark(from, 1) {
            return Err(TourError::Revisited { step: 1, square: from });
        }
        if !from.is_knight_step(to) {
            return Err(TourError::IllegalStep {
                step: step + 2,
                from,
                to,
            });
        }
        if !seen.mark(to, step as u32 + 2) {
            return Err(TourError::Revisited {
                step: step + 2,
                square: to,
            });
        }
    }
    if tour.len() == 1 && !seen.mark(start, 1) {
        return Err(TourError::Revisited {
            step: 1,
            square: start,
        });
    }

    Ok(())
}
