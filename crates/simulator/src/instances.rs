use ising::IsingHamiltonian;
use rng::SeedStream;
use tracing::debug;

/// Fully connected spin glass with couplings drawn from
/// `[-coupling, coupling)` and fields from `[-field, field)`.
///
/// Every pair `i < j` gets one bond, listed under `i`. The same seed always
/// gives the same model.
pub fn spin_glass(n: usize, coupling: f64, field: f64, seed: u64) -> IsingHamiltonian {
    let mut stream = SeedStream::from_u64(seed);

    let couplings = (0..n)
        .map(|i| {
            (i + 1..n)
                .map(|j| (j, stream.uniform(-coupling, coupling, b"J")))
                .collect()
        })
        .collect();
    let fields = (0..n)
        .map(|_| stream.uniform(-field, field, b"H"))
        .collect();
    debug!(sites = n, seed, draws = stream.draws(), "spin-glass instance");

    IsingHamiltonian::new(couplings, fields)
}
