fn main() -> Result<(), Box<dyn std::error::Error>> {
    let math = complex_math::ComplexMath::default();
    let mut controller = complex_math::CliDemoController::new(math, std::io::stdout().lock());

    controller.run()?;

    Ok(())
}
