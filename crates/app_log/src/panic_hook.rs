//! Panic hook for crash reporting

use backtrace::Backtrace;
use chrono::Local;
use std::panic::PanicHookInfo;

/// Install the crash-report panic hook
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(panic_handler));
    tracing::debug!("Panic hook initialized");
}

fn panic_handler(info: &PanicHookInfo) {
    let thread = std::thread::current();
    let report = crash_report(
        thread.name().unwrap_or("<unnamed>"),
        &format!("{:?}", info.location()),
        payload_text(info),
        &format!("{:?}", Backtrace::new()),
    );

    eprintln!("{}", report);

    // May be lost if the subscriber's worker already shut down
    tracing::error!("{}", report);

    let dump_path = std::env::temp_dir().join(format!(
        "lumina_lens_crash_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    if let Err(e) = std::fs::write(&dump_path, &report) {
        eprintln!("Failed to write crash dump: {}", e);
    }

    #[cfg(windows)]
    show_error_dialog(&dump_path, payload_text(info));
}

fn payload_text<'a>(info: &'a PanicHookInfo) -> &'a str {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.as_str()
    } else {
        "<unknown>"
    }
}

fn crash_report(thread: &str, location: &str, payload: &str, backtrace: &str) -> String {
    format!(
        "=== LUMINALENS PANIC ===\n\
         Timestamp: {}\n\
         Thread: {}\n\
         Location: {}\n\
         Payload: {}\n\n\
         Stack Trace:\n{}",
        Local::now().to_rfc3339(),
        thread,
        location,
        payload,
        backtrace
    )
}

#[cfg(windows)]
fn show_error_dialog(dump_path: &std::path::Path, payload: &str) {
    use windows::core::HSTRING;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    let msg = format!(
        "LuminaLens stopped unexpectedly.\n\nCrash report: {}\n\nError: {}",
        dump_path.display(),
        payload
    );

    unsafe {
        MessageBoxW(
            None,
            &HSTRING::from(msg),
            &HSTRING::from("LuminaLens - Fatal Error"),
            MB_ICONERROR | MB_OK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crash_report_contains_fields() {
        let report = crash_report("main", "src/main.rs:1:1", "boom", "<frames>");
        assert!(report.starts_with("=== LUMINALENS PANIC ==="));
        assert!(report.contains("Thread: main"));
        assert!(report.contains("Payload: boom"));
        assert!(report.contains("<frames>"));
    }
}
