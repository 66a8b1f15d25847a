use chatprobe::flows;
use chatprobe::probe_engine::CurlTransport;
use chatprobe::settings::{ProbeKind, load_from_cli};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut transport = CurlTransport::new(settings.config.timeout_total)
        .map_err(|err| io::Error::other(err.to_string()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &settings.probe {
        ProbeKind::Admin { credentials } => {
            flows::admin::run(&mut transport, &settings.config.base_url, credentials, &mut out)?;
        }
        ProbeKind::Groups { credentials } => {
            flows::groups::run(&mut transport, &settings.config.base_url, credentials, &mut out)?;
        }
    }

    out.flush()
}
