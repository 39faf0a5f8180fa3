use std::io::{self, Write};

use crate::core::{complex_math::ComplexMath, data::complex::Complex, errors::ComplexMathError};

pub struct CliDemoController<W: Write> {
    math: ComplexMath,
    out: W,
}

impl<W: Write> CliDemoController<W> {
    pub fn new(math: ComplexMath, out: W) -> Self {
        Self { math, out }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let math = self.math;
        let config = math.config();

        writeln!(self.out, "Complex number operations")?;
        writeln!(
            self.out,
            "Precision: {} decimal places",
            config.precision.decimal_places()
        )?;
        writeln!(self.out, "Phase:     {}", config.phase_convention)?;

        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(-1.0, 4.0);
        let c = Complex::new(3.0, -2.0);
        let i = Complex::new(0.0, 1.0);
        let zero = Complex::default();

        self.binary("add", a, b, Ok(math.add(a, b)))?;
        self.binary("subtract", a, b, Ok(math.subtract(a, b)))?;
        self.binary("multiply", a, a, Ok(math.multiply(a, a)))?;
        self.binary("divide", i, c, math.divide(i, c))?;
        self.binary("divide", a, zero, math.divide(a, zero))?;

        let modulus = math.modulus(Complex::new(3.0, 2.5));
        writeln!(self.out, "modulus (3+2.5i) = {}", modulus)?;
        writeln!(self.out, "conjugate ({}) = {}", c, math.conjugate(c))?;

        match math.phase(b) {
            Ok(angle) => writeln!(self.out, "phase ({}) = {}", b, angle)?,
            Err(e) => writeln!(self.out, "phase ({}) failed: {}", b, e)?,
        }

        self.conversion(Complex::new(3.0, 3.1416 / 3.0), "cartesian")?;
        self.conversion(Complex::new(-1.0, 3.0), "polar")?;
        self.conversion(a, "bogus")?;

        Ok(())
    }

    fn binary(
        &mut self,
        name: &str,
        a: Complex,
        b: Complex,
        result: Result<Complex, ComplexMathError>,
    ) -> io::Result<()> {
        match result {
            Ok(value) => writeln!(self.out, "{} ({}, {}) = {}", name, a, b, value),
            Err(e) => writeln!(self.out, "{} ({}, {}) failed: {}", name, a, b, e),
        }
    }

    fn conversion(&mut self, a: Complex, mode: &str) -> io::Result<()> {
        match self.math.convert(a, mode) {
            Ok(value) => writeln!(
                self.out,
                "convert ({}, {}) = ({}, {})",
                a, mode, value.real, value.imag
            ),
            Err(e) => writeln!(self.out, "convert ({}, {}) failed: {}", a, mode, e),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
