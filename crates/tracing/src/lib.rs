//!  Logging setup for processes embedding the query generator.
//!
//!  The primary entry point is [`EthspamTracer`], which installs a stdout layer in one of the
//!  supported [`LogFormat`]s. Tests use [`init_test_tracing`] instead.
//!
//!  # Examples
//!
//!  ```
//!  use ethspam_tracing::{
//!      tracing::level_filters::LevelFilter, EthspamTracer, LayerInfo, LogFormat, Tracer,
//!  };
//!
//!  fn main() -> eyre::Result<()> {
//!      let tracer = EthspamTracer::new().with_stdout(LayerInfo::new(
//!          LogFormat::Json,
//!          LevelFilter::INFO.to_string(),
//!          "ethspam::queries=debug".to_string(),
//!          None,
//!      ));
//!
//!      tracer.init()?;
//!
//!      // Your application logic here
//!
//!      Ok(())
//!  }
//!  ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

// Re-export our types
pub use formatter::LogFormat;
pub use test_tracer::TestTracer;

mod formatter;
mod test_tracer;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// A boxed tracing [`Layer`].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

///  Tracer for application logging.
///
///  Manages the configuration and initialization of the stdout logging layer.
#[derive(Debug, Clone, Default)]
pub struct EthspamTracer {
    stdout: LayerInfo,
}

impl EthspamTracer {
    ///  Constructs a new `Tracer` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    ///  Sets a custom configuration for the stdout layer.
    ///
    ///  # Arguments
    ///  * `config` - The `LayerInfo` to use for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }
}

///  Configuration for a logging layer.
///
///  This struct holds configuration parameters for a tracing layer, including
///  the format, filtering directives, optional coloring, and directive.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    ///  Constructs a new `LayerInfo`.
    ///
    ///  # Arguments
    ///  * `format` - Specifies the format for log messages.
    ///  * `default_directive` - Directive for filtering log messages.
    ///  * `filters` - Additional comma separated filtering directives.
    ///  * `color` - Optional color configuration for the log messages.
    pub const fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }

    /// Builds the [`EnvFilter`] for this layer.
    ///
    /// `RUST_LOG` takes precedence over the default directive; the additional filters are
    /// applied on top.
    pub fn env_filter(&self) -> eyre::Result<EnvFilter> {
        let default_directive: Directive = self.default_directive.parse()?;
        let mut filter = EnvFilter::builder()
            .with_default_directive(default_directive)
            .from_env_lossy();

        for directive in self.filters.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            filter = filter.add_directive(directive.parse()?);
        }
        Ok(filter)
    }
}

impl Default for LayerInfo {
    ///  Provides default values for `LayerInfo`.
    ///
    ///  By default, it uses terminal format, INFO level filter,
    ///  no additional filters, and ANSI colors unless `RUST_LOG_STYLE=never`.
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: LevelFilter::INFO.to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Trait defining a general interface for logging configuration.
///
/// Implementations can specify different logging setups, such as stdout logging for a load
/// generator or stderr logging for tests.
pub trait Tracer {
    /// Initialize the logging configuration.
    fn init(self) -> eyre::Result<()>;
}

impl Tracer for EthspamTracer {
    ///  Initializes the global subscriber with the configured stdout layer.
    fn init(self) -> eyre::Result<()> {
        let filter = self.stdout.env_filter()?;
        let layer = self.stdout.format.apply(filter, self.stdout.color);

        // The error is returned if the global default subscriber is already set,
        // so it's safe to ignore it
        let _ = tracing_subscriber::registry().with(vec![layer]).try_init().inspect_err(|e| {
            tracing::warn!(%e, "Tracing subscriber could not be initialized");
        });
        Ok(())
    }
}

///  Initializes a tracing subscriber for tests.
///
///  The filter is configurable via `RUST_LOG`.
///
///  # Note
///
///  The subscriber will silently fail if it could not be installed.
pub fn init_test_tracing() {
    let _ = TestTracer::default().init();
}
