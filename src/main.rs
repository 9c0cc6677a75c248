// src/main.rs

use std::process::ExitCode;

use cost_monitor::{cli, logging, run};

fn main() -> ExitCode {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors share the generic failure status.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("cost-monitor error: {err:?}");
        return ExitCode::from(1);
    }

    let mut stdout = std::io::stdout().lock();
    ExitCode::from(run(&args, &mut stdout))
}
