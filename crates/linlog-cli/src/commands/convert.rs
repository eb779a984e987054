//! Convert RGB triples between log and linear.

use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use linlog_ops::LogLinOp;
use std::io::Read;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let op = LogLinOp::new(args.mode.mode(), &args.params.to_params())
        .context("invalid parameters")?;

    let mut values = args.values;
    if values.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        for tok in input.split_whitespace() {
            values.push(
                tok.parse()
                    .with_context(|| format!("not a number: {tok}"))?,
            );
        }
    }
    if values.len() % 3 != 0 {
        bail!("expected RGB triples, got {} values", values.len());
    }

    if verbose {
        eprintln!("converting {} pixels ({:?})", values.len() / 3, op.mode());
    }

    op.apply_rgb(&mut values)?;
    for px in values.chunks_exact(3) {
        println!("{:.6} {:.6} {:.6}", px[0], px[1], px[2]);
    }
    Ok(())
}
