use std::process::ExitCode;

fn main() -> ExitCode {
    match app_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may be filtered out; stderr always carries the error.
            let _ = app_lib::report_error(&e, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
