/// Renders `real` and `imag` as `a+bi`, or `a-bi` when the imaginary part is
/// negative. A negative zero imaginary part is written as `+0i`.
#[must_use]
pub fn format(real: f64, imag: f64) -> String {
    let imag = if imag == 0.0 { 0.0 } else { imag };

    if imag < 0.0 {
        return format!("{}{}i", real, imag);
    }

    format!("{}+{}i", real, imag)
}
