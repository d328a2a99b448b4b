use bits::BitString;

/// Spin value of a bit: 0 -> -1, 1 -> +1.
pub fn spin(bit: u8) -> f64 {
    2.0 * f64::from(bit) - 1.0
}

/// Net spin of a configuration, ones minus zeros, in `[-len, len]`.
pub fn magnetization(config: &BitString) -> i64 {
    config.count_ones() as i64 - config.count_zeros() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnetization_of_mixed_config() {
        let c: BitString = "1101000".parse().unwrap();
        assert_eq!(magnetization(&c), -1);
        assert_eq!(magnetization(&BitString::new(0).unwrap()), 0);
    }

    #[test]
    fn spin_convention() {
        assert_eq!(spin(0), -1.0);
        assert_eq!(spin(1), 1.0);
    }
}
