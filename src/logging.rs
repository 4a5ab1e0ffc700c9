// logging.rs - tracing initialisation
//
// The browser has no stdout, so the client formats events with
// tracing-subscriber and hands each finished line to `console.log`.
// The dev host logs to stdout with an `EnvFilter`.

#[cfg(feature = "csr")]
mod browser {
    use std::io;

    /// Buffers one formatted event and writes it to the browser console on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
            }
        }
    }
}

/// Installs the global subscriber for the WASM client. Safe to call twice.
#[cfg(feature = "csr")]
pub fn init_browser_logging() {
    let result = tracing_subscriber::fmt()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(browser::ConsoleWriter::default)
        .try_init();

    if result.is_err() {
        tracing::warn!("Logger already initialized");
    }
}

/// Installs the global subscriber for the dev host. `RUST_LOG` overrides the
/// default `info` level.
#[cfg(feature = "serve")]
pub fn init_server_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();

    if result.is_err() {
        tracing::warn!("Logger already initialized");
    }
}
