use nano_units_core::result::BatchResult;
use std::time::Duration;

pub fn print_value(value: &str) {
    println!("{}", value);
}

pub fn print_batch(result: &BatchResult, elapsed: Duration) {
    for r in &result.results {
        match &r.output {
            Ok(out) => println!("{}\t{}", r.input, out),
            Err(e) => println!("{}\terror: {}", r.input, e),
        }
    }

    eprintln!("\n========================================");
    eprintln!("  Amounts:     {}", result.n_total());
    eprintln!("  Converted:   {}", result.n_ok());
    eprintln!("  Failed:      {}", result.n_failed());
    eprintln!("  Time:        {:.3}s", elapsed.as_secs_f64());
    eprintln!("========================================");

    for r in result.results.iter().filter(|r| !r.is_ok()) {
        if let Err(e) = &r.output {
            eprintln!("  line {}: {}", r.line, e);
        }
    }
}
