use num_traits::ToPrimitive;

pub mod clock;
pub mod pie;
pub mod progress;

/// Share of `value` in `total` as a percentage in `[0, 100]`, zero for an empty total.
pub fn percent_of<T: ToPrimitive>(value: T, total: T) -> f64 {
    let value = value.to_f64().unwrap_or(0.0);
    let total = total.to_f64().unwrap_or(0.0);
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    (value / total * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::percent_of;

    #[test]
    fn percent_of_integers_and_floats() {
        assert_eq!(percent_of(25u32, 100u32), 25.0);
        assert_eq!(percent_of(1.0, 4.0), 25.0);
        assert_eq!(percent_of(3u8, 0u8), 0.0);
        assert_eq!(percent_of(150, 100), 100.0);
    }
}
