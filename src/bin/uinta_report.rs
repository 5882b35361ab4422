use std::error::Error;

use simple_logger::SimpleLogger;

use uinta::{Constants, Report};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let report = Report::new(Constants::default())?;

    println!("{}", report.render()?);

    log::info!("Sensitivity table ({} rows)", report.sensitivity.rows.len());
    println!("{}", String::from_utf8(report.sensitivity.to_csv()?)?);

    Ok(())
}
