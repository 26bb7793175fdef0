use crate::domain::entities::FilterState;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// stdout is reserved for rendered deals.
pub fn init_logging(verbose: bool) {
    let filter = if verbose || cfg!(feature = "verbose-logging") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn log_notification(state: &FilterState) {
    let provider = state
        .provider_filter()
        .map_or_else(|| "any".to_string(), |id| id.to_string());
    let products = if state.has_product_filters() {
        state
            .product_filters()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "any".to_string()
    };

    tracing::info!(
        "Filter state changed: provider={}, products=[{}], {} deals loaded",
        provider,
        products,
        state.deals().len()
    );
}
