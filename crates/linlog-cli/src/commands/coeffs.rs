//! Print derived per-channel coefficients.

use crate::CoeffsArgs;
use anyhow::{Context, Result};

pub fn run(args: CoeffsArgs, _verbose: bool) -> Result<()> {
    let params = args.params.to_params();
    let coeffs = params.coeffs().context("invalid parameters")?;

    for (name, i) in [("R", 0), ("G", 1), ("B", 2)] {
        let c = &coeffs[i];
        println!(
            "{name}: black={:>6} white={:>6} gamma={:>5} offset={:.9} gain={:.9}",
            params.black_point[i], params.white_point[i], params.gamma[i], c.offset, c.gain
        );
    }
    Ok(())
}
