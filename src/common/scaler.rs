// Scaler is the floating point type used for all signal processing. Switch it to f64 when
// investigating accuracy issues.
pub type Scaler = f32;

/// Dot product of two equally long windows
pub fn dot(a: &[Scaler], b: &[Scaler]) -> Scaler {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(a, b)| *a * *b).sum()
}

/// Energy of a window (dot product with itself)
pub fn energy(a: &[Scaler]) -> Scaler {
    dot(a, a)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn dot_and_energy() {
        let a = [1.0, -2.0, 3.0];
        let b = [4.0, 5.0, -6.0];

        assert_eq!(dot(&a, &b), -24.0);
        assert_eq!(energy(&a), 14.0);
    }
}
