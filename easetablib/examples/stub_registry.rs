//! Sample a caller-supplied registry instead of the built-in set.

use easetablib::{sample_table, Registry};

fn main() {
    let registry = Registry::new()
        .register("linear", |t, b, c, d| b + c * t / d)
        .register("smoothstep", |t, b, c, d| {
            let x = t / d;
            b + c * x * x * (3.0 - 2.0 * x)
        });

    let table = sample_table(&registry, ["linear", "smoothstep"]).expect("sampling failed");

    println!("{}", table.render());
}
