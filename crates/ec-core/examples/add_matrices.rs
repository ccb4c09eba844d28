use anyhow::{Context, Result};
use ec_core::{api, Matrix, OpConfig, OpKind, Precision};

fn run<T: ec_core::Element>(op: OpKind, a: Vec<T>, b: Vec<T>) -> Result<Matrix<T>> {
    let a = Matrix::new(2, 2, a).context("left operand")?;
    let b = Matrix::new(2, 2, b).context("right operand")?;
    let out = api::apply(op, &a, &b).with_context(|| format!("{} failed", op))?;
    Ok(out)
}

fn main() -> Result<()> {
    ec_core::logging::init("info,ec_core=trace");

    // Operator and width can be picked on the command line, e.g. `-- mul f32`
    let mut args = std::env::args().skip(1);
    let op: OpKind = args.next().as_deref().unwrap_or("add").parse()?;
    let precision: Precision = args.next().as_deref().unwrap_or("f64").parse()?;
    let config = OpConfig::new(op, precision);
    log::info!("running {}", serde_json::to_string(&config)?);

    match config.precision {
        Precision::F32 => {
            let c = run(config.op, vec![1.0f32, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0])?;
            println!("{} (f32) = {}", config.op, c);
        }
        Precision::F64 => {
            let c = run(config.op, vec![1.0f64, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0])?;
            println!("{} (f64) = {}", config.op, c);
        }
    }

    // A 2x3 plus a 3x2 is rejected before anything is computed
    let a = Matrix::<f64>::zeros(2, 3)?;
    let b = Matrix::<f64>::zeros(3, 2)?;
    if let Err(e) = api::add(&a, &b) {
        log::warn!("expected failure: {}", e);
    }

    Ok(())
}
