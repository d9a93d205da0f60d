use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// `<data_dir>/dropcatch/dropcatch.log`
pub fn log_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dropcatch").join("dropcatch.log")
}

/// Route `log` records to the log file. The terminal belongs to the UI, so
/// nothing is ever written to stdout/stderr. Filter with `RUST_LOG`.
///
/// If the file can't be opened, logging stays disabled.
pub fn init() {
    let path = log_path();
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
