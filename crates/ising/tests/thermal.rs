use ising::{IsingError, IsingHamiltonian};

#[test]
fn ring_averages_regression() {
    let h = IsingHamiltonian::ring(10, 1.0, 0.1);
    let avg = h.thermal_averages(2.0).unwrap();

    assert!((avg.energy - -4.6378514858094695).abs() < 1e-9, "E = {}", avg.energy);
    assert!(
        (avg.magnetization - -0.1838233606011354).abs() < 1e-9,
        "M = {}",
        avg.magnetization
    );
    assert!(
        (avg.heat_capacity - 1.9883833749653714).abs() < 1e-9,
        "HC = {}",
        avg.heat_capacity
    );
    assert!(
        (avg.susceptibility - 1.8391722085614428).abs() < 1e-9,
        "MS = {}",
        avg.susceptibility
    );
}

#[test]
fn heat_capacity_is_non_negative() {
    let h = IsingHamiltonian::new(
        vec![
            vec![(1, -0.8), (3, 1.1)],
            vec![(2, 0.5)],
            vec![(3, -1.4), (4, 0.2)],
            vec![(4, 0.9)],
            vec![(0, 0.3)],
        ],
        vec![0.2, -0.4, 0.0, 0.1, 0.6],
    );
    for t in [0.5, 1.0, 2.0, 5.0, 20.0] {
        let avg = h.thermal_averages(t).unwrap();
        assert!(avg.heat_capacity >= 0.0, "T = {}, HC = {}", t, avg.heat_capacity);
        assert!(avg.susceptibility >= 0.0, "T = {}, MS = {}", t, avg.susceptibility);
    }
}

#[test]
fn zero_field_magnetization_vanishes() {
    let h = IsingHamiltonian::ring(8, -1.0, 0.0);
    for t in [0.5, 1.0, 3.0] {
        let avg = h.thermal_averages(t).unwrap();
        assert!(avg.magnetization.abs() < 1e-12, "T = {}, M = {}", t, avg.magnetization);
    }
}

#[test]
fn high_temperature_limit_of_free_spins() {
    // no couplings, no field: every state weighs the same
    let h = IsingHamiltonian::without_fields(vec![Vec::new(); 4]);
    let avg = h.thermal_averages(1.0).unwrap();
    assert_eq!(avg.energy, 0.0);
    assert_eq!(avg.heat_capacity, 0.0);
    // <m^2> = n for independent +-1 spins
    assert!((avg.susceptibility - 4.0).abs() < 1e-12);
}

#[test]
fn rejects_non_positive_temperature() {
    let h = IsingHamiltonian::ring(4, 1.0, 0.0);
    assert_eq!(h.thermal_averages(0.0), Err(IsingError::InvalidTemperature(0.0)));
    assert!(matches!(
        h.thermal_averages(-2.0),
        Err(IsingError::InvalidTemperature(_))
    ));
}

#[test]
fn empty_model_averages() {
    let h = IsingHamiltonian::default();
    let (e, m, hc, ms) = h.thermal_averages(1.0).unwrap().as_tuple();
    assert_eq!((e, m, hc, ms), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn low_temperature_stays_finite_and_non_negative() {
    let h = IsingHamiltonian::ring(10, 1.0, 0.1);
    let e0 = h.ground_state(false).unwrap().energy;
    for t in [0.1, 0.05, 0.01, 1e-3, 1e-6] {
        let avg = h.thermal_averages(t).unwrap();
        let (e, m, hc, ms) = avg.as_tuple();
        assert!(e.is_finite() && m.is_finite(), "T = {}: {:?}", t, avg);
        assert!(hc >= 0.0 && hc.is_finite(), "T = {}, HC = {}", t, hc);
        assert!(ms >= 0.0 && ms.is_finite(), "T = {}, MS = {}", t, ms);
        assert!(e >= e0 - 1e-9, "T = {}, E = {} below ground state {}", t, e, e0);
    }

    // both alternating ground states have zero net spin
    let cold = h.thermal_averages(0.01).unwrap();
    assert!((cold.energy - e0).abs() < 1e-9, "E = {}", cold.energy);
    assert!(cold.magnetization.abs() < 1e-9, "M = {}", cold.magnetization);
}

#[test]
fn strong_coupling_does_not_overflow() {
    let h = IsingHamiltonian::ring(10, 100.0, 0.0);
    let avg = h.thermal_averages(1.0).unwrap();

    // the lowest excitation costs 400, so only the two ground states count
    assert!((avg.energy - -1000.0).abs() < 1e-9, "E = {}", avg.energy);
    assert!(avg.magnetization.abs() < 1e-9, "M = {}", avg.magnetization);
    assert!(avg.heat_capacity >= 0.0 && avg.heat_capacity < 1e-9, "HC = {}", avg.heat_capacity);
    assert!(avg.susceptibility >= 0.0 && avg.susceptibility < 1e-9, "MS = {}", avg.susceptibility);
}
