//! Writes the `uniforms` and `gaussians` sample files read by the viewer.
//!
//! Uniforms come from the Park–Miller minimal standard generator; the
//! gaussians are the same uniforms pushed through an inverse normal CDF.

use std::path::Path;

use anyhow::{Context, Result};

const SAMPLE_COUNT: usize = 10_000;
const SEED: i64 = 1;

// ---------------------------------------------------------------------------
// Park–Miller linear congruential generator
// ---------------------------------------------------------------------------

/// Minimal standard LCG, `x' = 16807 x mod (2^31 - 1)`, evaluated with
/// Schrage's method so no intermediate exceeds 32 bits.
struct ParkMiller {
    seed: i64,
}

impl ParkMiller {
    const A: i64 = 16_807;
    const M: i64 = 2_147_483_647;
    const Q: i64 = 127_773;
    const R: i64 = 2_836;

    /// Seed 0 is a fixed point of the recurrence and is replaced by 1.
    fn new(seed: i64) -> Self {
        let seed = if seed == 0 { 1 } else { seed };
        ParkMiller { seed }
    }

    fn next_int(&mut self) -> i64 {
        let k = self.seed / Self::Q;
        self.seed = Self::A * (self.seed - k * Self::Q) - k * Self::R;
        if self.seed < 0 {
            self.seed += Self::M;
        }
        self.seed
    }

    /// Uniform in the open interval (0, 1).
    fn next_uniform(&mut self) -> f64 {
        self.next_int() as f64 / Self::M as f64
    }

    fn uniforms(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_uniform()).collect()
    }
}

// ---------------------------------------------------------------------------
// Inverse cumulative normal (Beasley–Springer–Moro)
// ---------------------------------------------------------------------------

const BSM_A: [f64; 4] = [
    2.506_628_238_84,
    -18.615_000_625_29,
    41.391_197_735_34,
    -25.441_060_496_37,
];

const BSM_B: [f64; 4] = [
    -8.473_510_930_90,
    23.083_367_437_43,
    -21.062_241_018_26,
    3.130_829_098_33,
];

const MORO_C: [f64; 9] = [
    0.337_475_482_272_614_7,
    0.976_169_019_091_718_6,
    0.160_797_971_491_820_9,
    0.027_643_881_033_386_3,
    0.003_840_572_937_360_9,
    0.000_395_189_651_191_9,
    0.000_032_176_788_176_8,
    0.000_000_288_816_736_4,
    0.000_000_396_031_518_7,
];

/// Standard normal quantile of `p`, for `p` in (0, 1).
fn inverse_normal_cdf(p: f64) -> f64 {
    let u = p - 0.5;

    if u.abs() < 0.42 {
        let y = u * u;
        let num = ((BSM_A[3] * y + BSM_A[2]) * y + BSM_A[1]) * y + BSM_A[0];
        let den = (((BSM_B[3] * y + BSM_B[2]) * y + BSM_B[1]) * y + BSM_B[0]) * y + 1.0;
        return u * num / den;
    }

    let tail = if u > 0.0 { 1.0 - p } else { p };
    let t = (-tail.ln()).ln();
    let r = MORO_C
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * t + c);

    if u < 0.0 {
        -r
    } else {
        r
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write `values` as a single comma-separated row.
fn write_row(path: &Path, values: &[f64]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer
        .write_record(values.iter().map(|v| v.to_string()))
        .with_context(|| format!("writing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

fn generate(dir: &Path, count: usize, seed: i64) -> Result<()> {
    let mut rng = ParkMiller::new(seed);
    let uniforms = rng.uniforms(count);
    let gaussians: Vec<f64> = uniforms.iter().map(|&u| inverse_normal_cdf(u)).collect();

    write_row(&dir.join("uniforms"), &uniforms)?;
    write_row(&dir.join("gaussians"), &gaussians)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    generate(Path::new("."), SAMPLE_COUNT, SEED).inspect_err(|e| {
        log::error!("{e:#}");
    })?;

    log::info!("Wrote {SAMPLE_COUNT} uniforms and gaussians (seed {SEED})");
    println!("Wrote {SAMPLE_COUNT} samples to ./uniforms and ./gaussians");
    Ok(())
}
