//! Sample the curve and write CSV to stdout.

use crate::CurveArgs;
use anyhow::{Context, Result, bail};
use linlog_ops::LogLinOp;

pub fn run(args: CurveArgs, verbose: bool) -> Result<()> {
    if args.samples < 2 {
        bail!("need at least 2 samples, got {}", args.samples);
    }
    let op = LogLinOp::new(args.mode.mode(), &args.params.to_params())
        .context("invalid parameters")?;

    if verbose {
        eprintln!("sampling {} points ({:?})", args.samples, op.mode());
    }

    println!("input,r,g,b");
    for i in 0..args.samples {
        let x = i as f32 / (args.samples - 1) as f32;
        let [r, g, b] = op.pixel([x, x, x]);
        println!("{x:.6},{r:.6},{g:.6},{b:.6}");
    }
    Ok(())
}
