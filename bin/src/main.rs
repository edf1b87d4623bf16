use std::io::Write;

use brightwatch::{BacklightBuilder, BrightwatchError};

use clap::Parser;

/// Print the backlight brightness as a percentage, then again on every change.
///
/// The device is taken from BACKLIGHT_DEVICE_PATH, or else the first of
/// amdgpu_bl1, intel_backlight and acpi_video0 under /sys/class/backlight.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    Args::parse();

    if let Err(e) = run().await {
        fatal(e);
    }
}

async fn run() -> Result<(), BrightwatchError> {
    let mut backlight = BacklightBuilder::from_env().build().await?;
    log::debug!("watching {}", backlight.device_path().display());

    let mut stdout = std::io::stdout().lock();
    report(&mut stdout, &backlight.format_percent())?;
    loop {
        backlight.next().await?;
        report(&mut stdout, &backlight.format_percent())?;
    }
}

/// One line per reading. A closed pipe comes back as an error rather than the
/// panic `println!` would give.
fn report(out: &mut impl Write, percent: &str) -> Result<(), BrightwatchError> {
    writeln!(out, "{percent}")?;
    Ok(())
}

/// Startup, watch and output errors all end up here.
fn fatal(e: BrightwatchError) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Error, ErrorKind};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_writes_a_line() {
        let mut out = Vec::new();
        report(&mut out, "50%").unwrap();
        report(&mut out, "75%").unwrap();
        assert_eq!(out, b"50%\n75%\n");
    }

    #[test]
    fn report_to_closed_pipe_is_an_error() {
        assert!(matches!(
            report(&mut ClosedPipe, "50%"),
            Err(BrightwatchError::Io(e)) if e.kind() == ErrorKind::BrokenPipe
        ));
    }
}
