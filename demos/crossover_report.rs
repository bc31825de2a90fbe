//! Crossover report: sweep the size/probability grid and print, per size,
//! where the linear coherence signal dies relative to the exponential
//! survival curve.
//!
//! Run with:
//!   cargo run --example crossover_report

use noise_threshold_sim::prelude::*;

fn main() -> Result<(), SweepError> {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║     Noise Threshold Crossover Report                    ║");
    println!("║     Exponential Survival vs Linear Coherence            ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    // ═══ 1. Per-size thresholds ═══
    let config = SweepConfig {
        min_exponent: 1,
        max_exponent: 10,
        probability_count: 41,
        ..SweepConfig::default()
    };
    let result = run_sweep(&config)?;

    println!("═══ 1. Analytic vs Observed Thresholds ═══");
    println!();
    println!("  p* = 1/n in closed form; the observed value is the first");
    println!("  sampled p at which the coherence signal has reached zero.");
    println!();
    println!("  {:>6}  {:>10}  {:>10}  {:>12}", "n", "p*=1/n", "observed", "surv<0.5 at");
    println!("  {:>6}  {:>10}  {:>10}  {:>12}", "──────", "──────────", "──────────", "────────────");
    for record in &result {
        let observed = record
            .crossover
            .observed_threshold
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "—".to_string());
        let crossing = record
            .crossover
            .survival_crossing
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "—".to_string());
        println!(
            "  {:>6}  {:>10.4}  {:>10}  {:>12}",
            record.n, record.crossover.analytic_threshold, observed, crossing
        );
    }

    // ═══ 2. Curves around the threshold for one size ═══
    println!();
    println!("═══ 2. Curves for n = 8 ═══");
    println!();
    let samples = generate_probabilities(9, 0.0, 0.25)?;
    println!(
        "  {:>6}  {:>10}  {:>10}  {:>10}  {}",
        "p", "survival", "coherence", "residual", "regime"
    );
    let crossover = detect(8, &samples)?;
    for (i, &p) in samples.iter().enumerate() {
        let pt = evaluate(8, p)?;
        println!(
            "  {:>6.4}  {:>10.4}  {:>10.4}  {:>10.4}  {}",
            p,
            pt.survival_exponential,
            pt.coherence_linear,
            pt.survival_exponential - pt.coherence_linear,
            crossover.regimes[i].as_str()
        );
    }

    // ═══ 3. Code-family survival and detector agreement ═══
    println!();
    println!("═══ 3. Code Families and Detector Agreement ═══");
    println!();
    let samples = generate_probabilities(41, 0.0, 1.0)?;
    let n = 16;
    for code in ErrorCode::ALL {
        let survival: Vec<f64> = samples
            .iter()
            .map(|&p| logical_survival(code, n, p))
            .collect::<Result<_, _>>()?;
        let coherence: Vec<f64> = samples.iter().map(|&p| {
            evaluate(n, p).map(|pt| pt.coherence_linear)
        }).collect::<Result<_, _>>()?;
        let rates = detection_rates(&survival, &coherence, 0.5)?;
        println!(
            "  {:<13} n={:<3} TPR={:.3}  FPR={:.3}",
            code.label(),
            n,
            rates.true_positive,
            rates.false_positive
        );
    }

    // ═══ 4. Single-run trace ═══
    println!();
    println!("═══ 4. Single Run Trace (bit-flip, n = 16, seed 42) ═══");
    println!();
    let samples = generate_probabilities(50, 0.0, 1.0)?;
    let trace = single_run_trace(ErrorCode::BitFlip, 16, &samples, 42)?;
    print!("  survival:  ");
    for t in &trace {
        print!("{}", if t.survived { '█' } else { '·' });
    }
    println!();
    print!("  coherence: ");
    for t in &trace {
        print!("{}", if t.coherence_detected { '█' } else { '·' });
    }
    println!();
    println!();
    println!("  (one column per sample, p ascending 0 → 1)");

    Ok(())
}
