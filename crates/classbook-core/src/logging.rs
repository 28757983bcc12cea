use crate::Result;

/// Initialize tracing for an application embedding classbook.
///
/// Default level is info. Can be overridden with `RUST_LOG`.
/// Calling this twice is harmless.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,classbook_core=info,classbook_parser=info,{service_name}=info"
        ))
    });

    // A global subscriber may already be installed by the host application.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init("classbook-test").unwrap();
        init("classbook-test").unwrap();
    }
}
