use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sweep::SweepRow;

pub fn write_sweep_csv(path: &Path, rows: &[SweepRow]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "temperature,energy,magnetization,heat_capacity,susceptibility")?;
    for row in rows {
        let a = &row.averages;
        writeln!(
            f,
            "{},{},{},{},{}",
            row.temperature, a.energy, a.magnetization, a.heat_capacity, a.susceptibility
        )?;
    }
    f.flush()
}
