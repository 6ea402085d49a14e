/// Ternary expression.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads it over five lines, and the border clamping
/// table in the energy calculation reads far better one row per line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
